//! Text and color palettes for the code rain layer.

use folio_core::Rgb;

/// Snippets drifting down behind the hero.
pub const CODE_SNIPPETS: &[&str] = &[
    "const developer = new FullStackDev();",
    "function buildAmazingApps() {",
    "  return innovation + passion;",
    "}",
    "class MachineLearning {",
    "  predict(future) {",
    "    return 'success';",
    "  }",
    "}",
    "import React from 'react';",
    "const skills = ['Java', 'Python', 'React'];",
    "if (opportunity.exists()) {",
    "  developer.apply();",
    "}",
    "SELECT * FROM opportunities",
    "WHERE company = 'innovative';",
    "git commit -m 'Ready for career'",
    "npm install --save future-success",
    "docker run -d career-growth",
    "const passion = true;",
    "while (learning) { grow(); }",
    "export default Portfolio;",
];

/// Alpha shared by every code rain color.
pub const CODE_COLOR_ALPHA: f64 = 0.6;

/// Code rain colors.
pub const CODE_COLORS: &[Rgb] = &[
    Rgb::new(34, 197, 94),  // Green
    Rgb::new(59, 130, 246), // Blue
    Rgb::new(139, 92, 246), // Purple
    Rgb::new(251, 191, 36), // Yellow
    Rgb::new(236, 72, 153), // Pink
    Rgb::new(16, 185, 129), // Emerald
];
