use crate::{Answer, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct Puzzle {
    pub day: u8,
    pub title: &'static str,
    pub solve: fn(&str) -> Result<Answer>,
}

impl std::fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Puzzle")
            .field("day", &self.day)
            .field("title", &self.title)
            .finish()
    }
}

const PUZZLES_DATA: &[Puzzle] = &[
    Puzzle {
        day: 1,
        title: "Secret Entrance",
        solve: crate::day01::solve,
    },
    Puzzle {
        day: 2,
        title: "Gift Shop",
        solve: crate::day02::solve,
    },
    Puzzle {
        day: 3,
        title: "Lobby",
        solve: crate::day03::solve,
    },
    Puzzle {
        day: 4,
        title: "Printing Department",
        solve: crate::day04::solve,
    },
    Puzzle {
        day: 5,
        title: "Cafeteria",
        solve: crate::day05::solve,
    },
    Puzzle {
        day: 6,
        title: "Trash Compactor",
        solve: crate::day06::solve,
    },
    Puzzle {
        day: 7,
        title: "Laboratories",
        solve: crate::day07::solve,
    },
    Puzzle {
        day: 8,
        title: "Playground",
        solve: crate::day08::solve,
    },
    Puzzle {
        day: 9,
        title: "Movie Theater",
        solve: crate::day09::solve,
    },
];

pub fn all_puzzles() -> &'static [Puzzle] {
    PUZZLES_DATA
}

// Build a day -> puzzle map once for O(1) lookup.
static PUZZLE_MAP: Lazy<HashMap<u8, &'static Puzzle>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in PUZZLES_DATA.iter() {
        m.insert(p.day, p);
    }
    m
});

pub fn get_puzzle(day: u8) -> Option<&'static Puzzle> {
    PUZZLE_MAP.get(&day).copied()
}
