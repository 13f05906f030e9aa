// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Find every occurrence of a word in a character grid.
//!
//! A word is spelled by a path of cells, each adjacent to the previous in one
//! of eight directions, using no cell twice. Each branch of the depth-first
//! search owns a copy of its path; a branch is only pushed when its cell holds
//! the next letter.
//!
//! Occurrences come out in search order: start cells row-major, then the
//! direction table order at each step.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::expand_depth_first;
use std::convert::Infallible;
use std::ops::ControlFlow;
use traverse_common::{Cell, Grid, Result};

const WORD_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct WordSearch;

#[derive(Debug, Clone, Default)]
pub struct WordSearchConfig {
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchResult {
    pub occurrences: Vec<Vec<Cell>>,
}

impl Algorithm for WordSearch {
    type Input = Grid<char>;
    type Config = WordSearchConfig;
    type Result = WordSearchResult;

    fn name() -> &'static str {
        "word_search"
    }

    fn run(grid: &Grid<char>, config: Self::Config) -> Result<Self::Result> {
        let word: Vec<char> = config.word.chars().collect();
        let Some(&first) = word.first() else {
            return Ok(WordSearchResult {
                occurrences: Vec::new(),
            });
        };

        let seeds = grid
            .iter()
            .filter(|&(_, &c)| c == first)
            .map(|(cell, _)| vec![cell]);

        let mut occurrences = Vec::new();
        let _ = expand_depth_first::<Vec<Cell>, Infallible>(seeds, |path, branches| {
            if path.len() == word.len() {
                occurrences.push(path);
                return ControlFlow::Continue(());
            }

            let wanted = word[path.len()];
            let Some(&last) = path.last() else {
                return ControlFlow::Continue(());
            };
            for next in grid.neighbors(last, &WORD_OFFSETS) {
                if grid[next] == wanted && !path.contains(&next) {
                    let mut extended = path.clone();
                    extended.push(next);
                    branches.push(extended);
                }
            }
            ControlFlow::Continue(())
        });

        Ok(WordSearchResult { occurrences })
    }
}
