// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Boggle: every dictionary word spelled by a path through the board.
//!
//! Paths move in eight directions and never reuse a cell. The search is an
//! explicit-stack DFS from every cell, extending a running string one letter
//! per step. Cells in use are tracked by [`MarkedPath`], which clears a mark
//! whenever its cell leaves the path, including when the path is dropped.
//! Branches whose string is not a prefix of any dictionary word are cut.

use crate::algo::algorithms::Algorithm;
use fxhash::FxHashSet;
use std::collections::BTreeSet;
use tracing::debug;
use traverse_common::{Cell, Grid, Result};

const BOGGLE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
    (0, 1),
    (1, 0),
    (1, 1),
];

pub struct Boggle;

#[derive(Debug, Clone, Default)]
pub struct BoggleConfig {
    pub dictionary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoggleResult {
    /// Sorted, without duplicates.
    pub words: Vec<String>,
}

/// The cells of the current search path, marked in a shared grid while they
/// are on it.
struct MarkedPath<'a> {
    marks: &'a mut Grid<bool>,
    cells: Vec<Cell>,
}

impl<'a> MarkedPath<'a> {
    fn new(marks: &'a mut Grid<bool>) -> Self {
        Self {
            marks,
            cells: Vec::new(),
        }
    }

    fn push(&mut self, cell: Cell) {
        self.marks[cell] = true;
        self.cells.push(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        let cell = self.cells.pop()?;
        self.marks[cell] = false;
        Some(cell)
    }

    fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    fn contains(&self, cell: Cell) -> bool {
        self.marks[cell]
    }
}

impl Drop for MarkedPath<'_> {
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}

struct Lexicon {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Lexicon {
    fn new(dictionary: &[String]) -> Self {
        let mut prefixes = FxHashSet::default();
        for word in dictionary {
            for (idx, _) in word.char_indices().skip(1) {
                prefixes.insert(word[..idx].to_string());
            }
            prefixes.insert(word.clone());
        }
        Self {
            words: dictionary.iter().cloned().collect(),
            prefixes,
        }
    }
}

/// One DFS from a single start cell.
struct Walk<'a, 'm> {
    board: &'a Grid<char>,
    lexicon: &'a Lexicon,
    path: MarkedPath<'m>,
    spelled: String,
    /// Next direction to try, one entry per path cell.
    cursors: Vec<usize>,
}

impl Walk<'_, '_> {
    fn enter(&mut self, cell: Cell, found: &mut BTreeSet<String>) {
        self.path.push(cell);
        self.spelled.push(self.board[cell]);
        if self.lexicon.words.contains(self.spelled.as_str()) {
            found.insert(self.spelled.clone());
        }
        let cursor = if self.lexicon.prefixes.contains(self.spelled.as_str()) {
            0
        } else {
            BOGGLE_OFFSETS.len()
        };
        self.cursors.push(cursor);
    }

    fn leave(&mut self) {
        self.path.pop();
        self.spelled.pop();
        self.cursors.pop();
    }
}

fn search_from(
    board: &Grid<char>,
    lexicon: &Lexicon,
    start: Cell,
    marks: &mut Grid<bool>,
    found: &mut BTreeSet<String>,
) {
    let mut walk = Walk {
        board,
        lexicon,
        path: MarkedPath::new(marks),
        spelled: String::new(),
        cursors: Vec::new(),
    };
    walk.enter(start, found);

    while let Some(cell) = walk.path.last() {
        let Some(cursor) = walk.cursors.last_mut() else {
            break;
        };
        match BOGGLE_OFFSETS.get(*cursor) {
            Some(&(d_row, d_col)) => {
                *cursor += 1;
                if let Some(next) = board.offset(cell, d_row, d_col)
                    && !walk.path.contains(next)
                {
                    walk.enter(next, found);
                }
            }
            None => walk.leave(),
        }
    }
}

impl Algorithm for Boggle {
    type Input = Grid<char>;
    type Config = BoggleConfig;
    type Result = BoggleResult;

    fn name() -> &'static str {
        "boggle"
    }

    fn run(board: &Grid<char>, config: Self::Config) -> Result<Self::Result> {
        let lexicon = Lexicon::new(&config.dictionary);
        let mut marks = Grid::filled(board.rows(), board.cols(), false);
        let mut found = BTreeSet::new();

        for start in board.cells() {
            search_from(board, &lexicon, start, &mut marks, &mut found);
        }

        debug!(
            dictionary = config.dictionary.len(),
            found = found.len(),
            "boggle search finished"
        );
        Ok(BoggleResult {
            words: found.into_iter().collect(),
        })
    }
}
