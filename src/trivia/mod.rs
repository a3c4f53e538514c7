//! Trivia facts shown after a successful conversion.

use rand::Rng;

/// The fixed fact pool. Stateless; one is drawn uniformly per conversion.
pub const FACTS: [&str; 5] = [
    "Did you know? The metric system is used by 95% of the world!",
    "Fun Fact: A mile was originally defined as 1,000 Roman paces.",
    "Energy Tip: 1 kilowatt-hour can power a TV for about 10 hours!",
    "Speed Trivia: The fastest recorded human speed is 44.72 km/h!",
    "Temperature Insight: The coldest recorded temperature on Earth is -128.6°F (-89.2°C) in Antarctica!",
];

/// Return one fact, uniformly sampled with replacement.
pub fn random_fact() -> &'static str {
    FACTS[rand::thread_rng().gen_range(0..FACTS.len())]
}
