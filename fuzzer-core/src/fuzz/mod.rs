//! Round-trip fuzzing loop.
//!
//! Each round draws a slice of the shared input buffer, compresses it and
//! decodes the result into destinations that are exactly sized, too large
//! and too small. Every decode destination is followed by a sentinel that
//! must survive the call.

use std::io::Write;

use tracing::debug;

use crate::codec::SymbolCodec;
use crate::config::{FuzzConfig, MAX_SLACK};
use crate::error::{Degenerate, Result, Stage, TestContext, Violation};
use crate::fingerprint::fingerprint;
use crate::generator::generate_symbols;
use crate::guard::{GuardedBuffer, GuardedView};
use crate::report::Reporter;
use crate::rng::FuzzRng;


/// Result of a single check.
pub type CheckResult<T> = std::result::Result<T, Violation>;

/// Outcome of a passing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A frame was produced and passed all three decode checks.
    RoundTrip {
        /// Compressed size in bytes
        compressed_size: usize,
    },
    /// The codec returned a degenerate size, verified separately.
    Degenerate(Degenerate),
}

/// Totals of a passing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzSummary {
    /// Rounds executed.
    pub tests: u32,
    /// Rounds that produced a frame.
    pub round_trips: u32,
    /// Rounds stored raw.
    pub raw: u32,
    /// Rounds stored as a single-symbol run.
    pub rle: u32,
}

impl FuzzSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        self.tests += 1;
        match outcome {
            RoundOutcome::RoundTrip { .. } => self.round_trips += 1,
            RoundOutcome::Degenerate(Degenerate::Raw) => self.raw += 1,
            RoundOutcome::Degenerate(Degenerate::Rle) => self.rle += 1,
        }
    }
}

/// Buffers reused by every round.
#[derive(Debug)]
pub struct Scratch {
    compressed: Vec<u8>,
    verify: GuardedBuffer,
}

impl Scratch {
    /// Sizes the buffers for slices of up to `max_test_size` symbols.
    pub fn new<C: SymbolCodec>(codec: &C, max_test_size: usize) -> Self {
        Self {
            compressed: vec![0; codec.compress_bound(max_test_size)],
            verify: GuardedBuffer::new(max_test_size + MAX_SLACK),
        }
    }

    fn arm(&mut self, len: usize) -> CheckResult<GuardedView<'_>> {
        arm(&mut self.verify, len)
    }
}

fn arm(verify: &mut GuardedBuffer, len: usize) -> CheckResult<GuardedView<'_>> {
    let capacity = verify.capacity();
    verify.arm(len).ok_or(Violation::ScratchTooSmall {
        requested: len,
        capacity,
    })
}

/// Draws `(offset, size)` of a round's slice from the round-local generator.
pub fn pick_slice(round: &mut FuzzRng, config: &FuzzConfig) -> (usize, usize) {
    let size = (round.next_u32() as usize & config.max_test_size_mask) + 1;
    let offset = round.next_u32() as usize % config.offset_range();
    (offset, size)
}

/// Draws the slack added to or removed from a destination, in `1..=32`.
fn draw_slack(round: &mut FuzzRng) -> usize {
    (round.next_u32() as usize & (MAX_SLACK - 1)) + 1
}

fn ensure(condition: bool, violation: Violation) -> CheckResult<()> {
    if condition {
        Ok(())
    } else {
        Err(violation)
    }
}

/// Checks that `decoded` symbols of `view` reproduce `expected`.
fn check_decoded(
    view: &GuardedView<'_>,
    decoded: usize,
    expected: u64,
    stage: Stage,
) -> CheckResult<()> {
    let matches = view
        .as_slice()
        .get(..decoded)
        .is_some_and(|symbols| fingerprint(symbols) == expected);
    ensure(matches, Violation::Corrupted { stage })
}

/// Runs every check of one round on `src`.
///
/// `round` supplies the destination slack; it is only drawn from when the
/// codec produces a frame.
///
/// # Errors
///
/// Returns the first [`Violation`] observed.
pub fn check_round<C, W>(
    codec: &C,
    src: &[u16],
    scratch: &mut Scratch,
    round: &mut FuzzRng,
    table_log: u32,
    reporter: &mut Reporter<W>,
) -> CheckResult<RoundOutcome>
where
    C: SymbolCodec,
    W: Write,
{
    let orig_size = src.len();
    let hash_orig = fingerprint(src);

    reporter.stage(0);
    let compressed_size = codec
        .compress(&mut scratch.compressed, src, codec.max_symbol_value(), table_log)
        .map_err(|err| Violation::CompressFailed {
            error: err.to_string(),
        })?;

    match compressed_size {
        0 => return check_raw(src, hash_orig, scratch),
        1 => return check_rle(src, hash_orig, scratch),
        _ => {}
    }

    let Scratch { compressed, verify } = scratch;
    let compressed = &compressed[..compressed_size];
    let decode_failed = |stage: Stage, err: C::Error| Violation::DecompressFailed {
        stage,
        error: err.to_string(),
        orig_size,
        compressed_size,
    };

    // Exact destination: must succeed and leave the sentinel alone.
    reporter.stage(1);
    {
        let mut view = arm(verify, orig_size)?;
        let result = codec.decompress(view.as_mut_slice(), compressed);
        ensure(view.sentinel_intact(), Violation::Overrun { stage: Stage::Exact })?;
        let decoded = result.map_err(|err| decode_failed(Stage::Exact, err))?;
        check_decoded(&view, decoded, hash_orig, Stage::Exact)?;
    }

    // Larger destination than necessary: must succeed as well.
    reporter.stage(2);
    {
        let dst_size = orig_size + draw_slack(round);
        let mut view = arm(verify, dst_size)?;
        let result = codec.decompress(view.as_mut_slice(), compressed);
        ensure(view.sentinel_intact(), Violation::Overrun { stage: Stage::Oversized })?;
        let decoded = result.map_err(|err| decode_failed(Stage::Oversized, err))?;
        check_decoded(&view, decoded, hash_orig, Stage::Oversized)?;
    }

    // Smaller destination than required: must fail without overrunning.
    reporter.stage(3);
    {
        let mut shrink = draw_slack(round);
        if shrink >= orig_size {
            shrink = 1;
        }
        let dst_size = orig_size - shrink;
        let mut view = arm(verify, dst_size)?;
        let result = codec.decompress(view.as_mut_slice(), compressed);
        ensure(view.sentinel_intact(), Violation::Overrun { stage: Stage::Undersized })?;
        ensure(
            result.is_err(),
            Violation::UndersizedAccepted {
                orig_size,
                dst_size,
            },
        )?;
    }

    Ok(RoundOutcome::RoundTrip { compressed_size })
}

/// Framing allowance of [`order0_estimate`], in bytes.
const FRAME_ALLOWANCE: usize = 16;

/// Table allowance of [`order0_estimate`] per distinct symbol, in bytes.
const SYMBOL_ALLOWANCE: usize = 4;

/// Generous size estimate of an order-0 entropy-coded frame for `src`.
///
/// Shannon payload rounded up to bytes, plus [`SYMBOL_ALLOWANCE`] bytes per
/// distinct symbol and [`FRAME_ALLOWANCE`] bytes of framing.
pub fn order0_estimate(src: &[u16]) -> usize {
    let mut counts = vec![0u32; usize::from(u16::MAX) + 1];
    for &symbol in src {
        counts[usize::from(symbol)] += 1;
    }

    let total = src.len() as f64;
    let mut present = 0;
    let mut bits = 0.0f64;
    for &count in counts.iter().filter(|&&count| count > 0) {
        present += 1;
        let count = f64::from(count);
        bits += count * (total / count).log2();
    }

    (bits / 8.0).ceil() as usize + present * SYMBOL_ALLOWANCE + FRAME_ALLOWANCE
}

/// A raw block must be justified by the input and reproducible by copying it.
///
/// Raw storage costs two bytes per symbol. It is accepted only when
/// [`order0_estimate`] exceeds half of that.
fn check_raw(src: &[u16], expected: u64, scratch: &mut Scratch) -> CheckResult<RoundOutcome> {
    let estimate = order0_estimate(src);
    ensure(
        estimate > src.len(),
        Violation::RawNotJustified {
            orig_size: src.len(),
            estimate,
        },
    )?;

    let mut view = scratch.arm(src.len())?;
    view.as_mut_slice().copy_from_slice(src);
    let intact = view.sentinel_intact() && fingerprint(view.as_slice()) == expected;
    ensure(intact, Violation::DegenerateMismatch { kind: Degenerate::Raw })?;
    Ok(RoundOutcome::Degenerate(Degenerate::Raw))
}

/// A run block must be reproducible by repeating the first symbol.
fn check_rle(src: &[u16], expected: u64, scratch: &mut Scratch) -> CheckResult<RoundOutcome> {
    let symbol = src.first().copied().unwrap_or_default();
    let mut view = scratch.arm(src.len())?;
    view.as_mut_slice().fill(symbol);
    let intact = view.sentinel_intact() && fingerprint(view.as_slice()) == expected;
    ensure(intact, Violation::DegenerateMismatch { kind: Degenerate::Rle })?;
    Ok(RoundOutcome::Degenerate(Degenerate::Rle))
}

/// Positions the global generator at the start of test `test_nb`.
pub fn seed_at(seed: u32, test_nb: u32) -> FuzzRng {
    let mut rng = FuzzRng::new(seed);
    rng.skip(test_nb);
    rng
}

/// Generates the input buffer and runs tests `start_test..total_tests`.
///
/// # Errors
///
/// - [`crate::Error::InvalidOption`] if `config` fails validation
/// - [`crate::Error::Failure`] for the first failing round
pub fn run_fuzz_tests<C, W>(
    codec: &C,
    config: &FuzzConfig,
    reporter: &mut Reporter<W>,
) -> Result<FuzzSummary>
where
    C: SymbolCodec,
    W: Write,
{
    config.validate()?;

    let symbols = generate_symbols(
        config.buffer_len,
        config.probability,
        config.seed,
        codec.max_symbol_value(),
    );
    let mut scratch = Scratch::new(codec, config.max_test_size());
    let mut seed = seed_at(config.seed, config.start_test);
    let mut summary = FuzzSummary::default();

    for test_nb in config.start_test..config.total_tests {
        let mut round = seed.round_rng();
        seed.next_u32();

        reporter.progress(test_nb);

        let (offset, size) = pick_slice(&mut round, config);
        let src = &symbols[offset..offset + size];
        let outcome = check_round(codec, src, &mut scratch, &mut round, config.table_log, reporter)
            .map_err(|violation| {
                TestContext {
                    seed: config.seed,
                    test_nb,
                }
                .fail(violation)
            })?;

        debug!(test_nb, offset, size, ?outcome, "round passed");
        summary.record(outcome);
    }

    Ok(summary)
}
