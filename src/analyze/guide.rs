// src/analyze/guide.rs

/// Static "how to build a channel like this" checklist shown under a channel report.
pub const GROWTH_STEPS: [&str; 10] = [
    "Define a clear niche that resonates with your passion and audience.",
    "Research top competitors and map out content gaps.",
    "Create a compelling channel banner, logo, and description.",
    "Plan your first 10 videos. Focus on quality, storytelling, and SEO-rich titles.",
    "Invest in good equipment (camera, mic, lighting) and learn basic editing.",
    "Publish consistently (e.g., 1–2 videos/week) with eye-catching thumbnails.",
    "Engage your viewers: ask questions, reply to comments, and build community.",
    "Promote on social media, collaborate with peers, and cross-post teasers.",
    "Monitor YouTube Analytics weekly: watch time, retention, traffic sources.",
    "Apply for the YouTube Partner Program once you hit 1,000 subs & 4,000 watch-hours.",
];

/// Numbered lines, `1. ...` through `10. ...`.
pub fn numbered_steps() -> Vec<String> {
    GROWTH_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect()
}
