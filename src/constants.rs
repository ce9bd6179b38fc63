// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Minimum number of notes the collection must retain.
///
/// A delete request that would drop the collection below this floor is
/// rejected with a notice. Overridable via `--min-notes`.
///
/// Used in: `application/notebook.rs`, `cli/args.rs`
pub const DEFAULT_MIN_NOTES: usize = 1;

/// Title of the note a fresh session starts with.
///
/// Used in: `application/notebook.rs`
pub const SEED_NOTE_TITLE: &str = "Welcome!";

/// Content of the note a fresh session starts with.
///
/// Used in: `application/notebook.rs`
pub const SEED_NOTE_CONTENT: &str = "Write your first note";

/// How long a transient notice stays on screen, in milliseconds.
///
/// Notices are fire-and-forget: they expire on their own and never gate
/// further input.
///
/// Used in: `tui/mod.rs`
pub const NOTICE_DURATION_MS: u64 = 2500;

/// Event-loop tick rate in milliseconds.
///
/// The tick only drives notice expiry; all state mutations happen
/// synchronously on key events.
///
/// Used in: `tui/mod.rs`
pub const TICK_RATE_MS: u64 = 250;

/// Maximum width of a note label in the drawer, in characters.
///
/// Longer titles are truncated with an ellipsis so the drawer column stays
/// readable.
///
/// Used in: `tui/ui.rs`, `util/text.rs`
pub const DRAWER_LABEL_WIDTH: usize = 28;
