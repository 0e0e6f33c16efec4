//! Character constants for backdrop rendering.

/// Characters used for twinkling backdrop stars.
pub const STAR_CHARS: &[char] = &['.', '·', '˙', '+', '✦', '✧'];
