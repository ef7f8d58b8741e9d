use std::fmt;

use ratatui::style::{palette::tailwind, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Personal,
    Work,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Category::Personal => tailwind::SKY.c400,
            Category::Work => tailwind::AMBER.c400,
            Category::Shopping => tailwind::EMERALD.c400,
            Category::Other => tailwind::SLATE.c400,
        }
    }

    /// Steps through unset followed by every category, wrapping around.
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        super::cycle_choice(&Self::ALL, current, forward)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
