pub static PLACEHOLDER_PROMPT: &str = "A koala chilling on a tree";

pub static SURPRISE_PROMPTS: [&str; 3] = [
    "A steampunk-inspired flying machine in the clouds",
    "A futuristic cityscape with hovering vehicles",
    "An underwater scene with bioluminescent creatures",
];

pub fn pick_surprise_prompt(seed: u64) -> &'static str {
    SURPRISE_PROMPTS[(seed % SURPRISE_PROMPTS.len() as u64) as usize]
}
