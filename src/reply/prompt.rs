//! Coaching instructions sent with every prompt.

use crate::core::Topic;
use std::fmt::Write;

/// Persona and formatting rules for the assistant.
pub const SYSTEM_INSTRUCTIONS: &str = r#"You are MikeBot, a basketball training assistant.
Always give advice that is:
- Practical and related to basketball or fitness
- Structured with drills, number of reps, sets, or time
- Easy for athletes to follow
Example style:
  "Try 3 sets of 20 left-hand dribbles with cones.
   Then finish with 2 sets of 1-minute crossover dribbles."
If the topic is 'Diet', give meal suggestions with portion sizes.
If the topic is 'Physique Training', give workout sets & reps."#;

/// Builds the full prompt for one user turn.
///
/// # Examples
///
/// ```
/// use courtside::core::Topic;
/// use courtside::reply::build_prompt;
///
/// let prompt = build_prompt("How do I shoot off the dribble?", Topic::Shooting);
/// assert!(prompt.contains("The user selected the topic: Shooting."));
/// assert!(prompt.ends_with("User: How do I shoot off the dribble?"));
/// ```
#[must_use]
pub fn build_prompt(user_prompt: &str, topic: Topic) -> String {
    let mut prompt = String::new();
    let mut lines = SYSTEM_INSTRUCTIONS.lines();
    if let Some(persona) = lines.next() {
        let _ = writeln!(prompt, "{persona}");
    }
    let _ = writeln!(prompt, "The user selected the topic: {}.", topic.label());
    for line in lines {
        let _ = writeln!(prompt, "{line}");
    }
    let _ = write!(prompt, "User: {}", user_prompt.trim());
    prompt
}
