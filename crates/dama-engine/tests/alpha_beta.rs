//! Alpha-beta against plain minimax on synthetic trees and real positions.

use std::cell::Cell;

use dama_core::Board;
use dama_engine::search::alphabeta::{MAX_BOUND, MIN_BOUND, SearchContext, alpha_beta};
use dama_engine::{
    Evaluator, Material, Position, Positional, Role, SearchNode, Searcher, StopSignal,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform game tree addressed by the path of child indices from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tree {
    branching: usize,
    height: usize,
    root_role: Role,
    path: Vec<usize>,
}

impl Tree {
    fn new(branching: usize, height: usize, root_role: Role) -> Self {
        Self {
            branching,
            height,
            root_role,
            path: Vec::new(),
        }
    }

    /// Leaf reached by following the path and then the first child down.
    fn leaf_index(&self) -> usize {
        let padded = self.path.iter().copied().chain(std::iter::repeat(0));
        padded
            .take(self.height)
            .fold(0, |acc, child| acc * self.branching + child)
    }
}

impl Position for Tree {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        if self.path.len() == self.height {
            Vec::new()
        } else {
            (0..self.branching).collect()
        }
    }

    fn apply_move(&mut self, mv: usize) {
        self.path.push(mv);
    }

    fn undo_move(&mut self, mv: usize) {
        assert_eq!(self.path.pop(), Some(mv), "undo out of order");
    }

    fn role_to_move(&self) -> Role {
        if self.path.len() % 2 == 0 {
            self.root_role
        } else {
            self.root_role.opponent()
        }
    }
}

/// Leaf values looked up by leaf index; counts how often it is asked.
struct LeafValues {
    values: Vec<i32>,
    visits: Cell<usize>,
}

impl LeafValues {
    fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            visits: Cell::new(0),
        }
    }

    fn take_visits(&self) -> usize {
        self.visits.replace(0)
    }
}

impl Evaluator<Tree> for LeafValues {
    fn evaluate(&self, tree: &Tree) -> i32 {
        self.visits.set(self.visits.get() + 1);
        self.values[tree.leaf_index()]
    }
}

/// Unpruned minimax with the same terminal handling as the engine.
fn minimax<P: Position, E: Evaluator<P>>(position: &mut P, depth: u8, evaluator: &E) -> i32 {
    let moves = position.legal_moves();
    if depth == 0 || moves.is_empty() {
        return evaluator.evaluate(position);
    }
    let mut values = Vec::with_capacity(moves.len());
    for mv in moves {
        position.apply_move(mv);
        values.push(minimax(position, depth - 1, evaluator));
        position.undo_move(mv);
    }
    match position.role_to_move() {
        Role::Max => values.into_iter().max(),
        Role::Min => values.into_iter().min(),
    }
    .unwrap_or_default()
}

fn search<P, E>(position: &mut P, depth: u8, evaluator: &E) -> (i32, Option<P::Move>)
where
    P: Position,
    E: Evaluator<P>,
{
    let stop = StopSignal::new();
    let mut ctx = SearchContext::new(evaluator, &stop);
    let mut root = SearchNode::new(position);
    let value = alpha_beta(&mut root, MIN_BOUND, MAX_BOUND, depth, &mut ctx).unwrap();
    (value, root.best_move())
}

const LEAVES: [i32; 8] = [3, 5, 2, 9, 0, 7, 4, 8];

#[test]
fn three_ply_tree_maximizing_root() {
    let mut tree = Tree::new(2, 3, Role::Max);
    let leaves = LeafValues::new(LEAVES.to_vec());

    let expected = minimax(&mut tree, 3, &leaves);
    let minimax_visits = leaves.take_visits();
    let (value, best) = search(&mut tree, 3, &leaves);

    assert_eq!(expected, 7);
    assert_eq!(value, expected);
    assert_eq!(best, Some(1));
    // Every leaf lies inside the window here, so nothing can be cut
    assert_eq!(leaves.take_visits(), minimax_visits);
    assert!(tree.path.is_empty());
}

#[test]
fn three_ply_tree_minimizing_root_prunes() {
    let mut tree = Tree::new(2, 3, Role::Min);
    let leaves = LeafValues::new(LEAVES.to_vec());

    let expected = minimax(&mut tree, 3, &leaves);
    let minimax_visits = leaves.take_visits();
    let (value, best) = search(&mut tree, 3, &leaves);

    assert_eq!(expected, 3);
    assert_eq!(value, expected);
    assert_eq!(best, Some(0));
    assert_eq!(minimax_visits, 8);
    assert_eq!(leaves.take_visits(), 7, "leaf 9 should be cut off");
    assert!(tree.path.is_empty());
}

#[test]
fn random_trees_match_minimax() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let branching: usize = rng.random_range(1..=4);
        let height = rng.random_range(1..=5);
        let role = if rng.random_bool(0.5) { Role::Max } else { Role::Min };
        let count = branching.pow(height as u32);
        let values = (0..count).map(|_| rng.random_range(-50..=50)).collect();
        let leaves = LeafValues::new(values);
        let mut tree = Tree::new(branching, height, role);

        for depth in 1..=height as u8 {
            let expected = minimax(&mut tree, depth, &leaves);
            let minimax_visits = leaves.take_visits();
            let (value, best) = search(&mut tree, depth, &leaves);
            assert_eq!(value, expected, "tree {tree:?} depth {depth}");
            assert!(leaves.take_visits() <= minimax_visits);

            // The chosen root move is worth exactly the root value
            let best = best.expect("non-terminal root has a best move");
            tree.apply_move(best);
            assert_eq!(minimax(&mut tree, depth - 1, &leaves), expected);
            tree.undo_move(best);
            leaves.take_visits();
        }
    }
}

#[test]
fn tied_children_keep_first_move() {
    let mut tree = Tree::new(3, 1, Role::Max);
    let leaves = LeafValues::new(vec![4, 6, 6]);
    assert_eq!(search(&mut tree, 1, &leaves), (6, Some(1)));

    let mut tree = Tree::new(3, 1, Role::Min);
    let leaves = LeafValues::new(vec![2, 1, 1]);
    assert_eq!(search(&mut tree, 1, &leaves), (1, Some(1)));
}

#[test]
fn board_positions_match_minimax() {
    let fens = [
        dama_core::STARTING_FEN,
        "W:W28,32,33,37,K46:B12,17,18,19,23",
        "B:W27,28,32,38,39,43:B7,12,13,18,22,K45",
        "W:WK3,31,36:B19,23,24,K47",
    ];
    for fen in fens {
        let mut board: Board = fen.parse().unwrap();
        let before = board;
        for depth in 1..=3 {
            assert_eq!(
                search(&mut board, depth, &Positional).0,
                minimax(&mut board, depth, &Positional),
                "{fen} depth {depth}"
            );
            assert_eq!(
                search(&mut board, depth, &Material).0,
                minimax(&mut board, depth, &Material),
                "{fen} depth {depth}"
            );
        }
        assert_eq!(board, before);
    }
}

#[test]
fn driver_agrees_with_single_iteration() {
    let mut board: Board = "W:W28,32,33,37,K46:B12,17,18,19,23".parse().unwrap();
    let mut searcher = Searcher::new(Positional);
    let result = searcher.search(&mut board, 4, |_, _, _, _| {});
    let (value, best) = search(&mut board, 4, &Positional);
    assert_eq!(result.value, value);
    assert_eq!(result.best_move, best);
    assert_eq!(result.depth, 4);
}
