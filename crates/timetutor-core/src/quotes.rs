//! Motivational quotes shown alongside the day's plans.

use rand::Rng;

/// The fixed pool quotes are drawn from.
pub const QUOTES: [&str; 8] = [
    "Padikka padichaa, Vetri thaan da varum! 🏆",
    "Pasanga padikkumbothu, Mass ah thaan irukum! 💪",
    "Success na shortcut illa da — daily effort dhaan key 🔥",
    "Oru naal namba per solla world wait panum! 🌟",
    "Hard work ku substitute illa da! Keep going! 💯",
    "Today's plan, tomorrow's success! Vera level da! 🚀",
    "Consistency thaan champion aakum! Rock on! 🎸",
    "Dream big, work smart, achieve more! Semma! ⚡",
];

/// Returns one quote picked uniformly at random.
pub fn random_quote() -> &'static str {
    random_quote_with(&mut rand::rng())
}

/// Returns one quote picked uniformly using `rng`.
pub fn random_quote_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES[rng.random_range(0..QUOTES.len())]
}
