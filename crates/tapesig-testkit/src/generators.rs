//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tapesig_core::{Tape, TapeCell};
use tapesig_secp256k1::Keypair;

/// Generate a random keypair. Seeds outside the curve order are skipped.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_filter_map("seed is not a valid secret scalar", |seed| {
        Keypair::from_seed(&seed).ok()
    })
}

/// Generate data bytes of specified max length.
pub fn data(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate an opcode byte outside the push range.
pub fn opcode() -> impl Strategy<Value = u8> {
    prop_oneof![Just(0x00u8), 0x4fu8..=0xff]
}

/// Generate one cell.
pub fn tape_cell() -> impl Strategy<Value = TapeCell> {
    prop_oneof![
        3 => data(300).prop_map(|d| TapeCell::data(d)),
        1 => opcode().prop_map(TapeCell::opcode),
    ]
}

/// Generate a tape of up to `max_cells` cells.
pub fn tape(max_cells: usize) -> impl Strategy<Value = Tape> {
    prop::collection::vec(tape_cell(), 0..=max_cells).prop_map(Tape::new)
}

/// Generate an output index as the host would pass it: decimal text or,
/// below 256, a single raw byte that is not an ASCII digit.
pub fn index_argument() -> impl Strategy<Value = (u64, Vec<u8>)> {
    prop_oneof![
        (0u64..=u64::from(u32::MAX)).prop_map(|i| (i, i.to_string().into_bytes())),
        any::<u8>()
            .prop_filter("ASCII digits read as text", |b| !b.is_ascii_digit())
            .prop_map(|b| (u64::from(b), vec![b])),
    ]
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800
}

/// Parameters for generating a tape.
#[derive(Debug, Clone)]
pub struct TapeParams {
    pub leading: Vec<u8>,
    pub data: Vec<Vec<u8>>,
}

impl Arbitrary for TapeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::collection::vec(opcode(), 0..=2),
            prop::collection::vec(data(600), 0..=6),
        )
            .prop_map(|(leading, data)| TapeParams { leading, data })
            .boxed()
    }
}

/// Build a tape: leading opcodes, then data cells.
pub fn tape_from_params(params: &TapeParams) -> Tape {
    params
        .leading
        .iter()
        .map(|op| TapeCell::opcode(*op))
        .chain(params.data.iter().map(|d| TapeCell::data(d.clone())))
        .collect()
}
