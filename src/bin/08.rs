#![doc = include_str!("../puzzles/08.md")]

use std::collections::HashMap;

use advent_of_code_2023::{
    debugln,
    helpers::{math, parse},
};
use index_vec::IndexVec;

index_vec::define_index_type! {
    struct NodeId = u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

impl Turn {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Turn::Left),
            'R' => Some(Turn::Right),
            _ => None,
        }
    }
}

/// A node line as written in the input, before names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeLine {
    pub name: String,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone)]
struct Node {
    pub name: String,
    pub left: NodeId,
    pub right: NodeId,
}

#[derive(Debug)]
struct Network {
    turns: Vec<Turn>,
    name_to_id: HashMap<String, NodeId>,
    nodes: IndexVec<NodeId, Node>,
}

impl Network {
    pub fn parse(input: &str) -> Option<Self> {
        let mut lines = input.lines().filter(|line| !line.is_empty());
        let turns: Vec<Turn> = lines
            .next()?
            .trim()
            .chars()
            .map(Turn::from_char)
            .collect::<Option<_>>()?;
        if turns.is_empty() {
            return None;
        }

        let node_lines: Vec<NodeLine> = lines
            .map(|line| parse::from_str_ok(line, NodeLine::parser()))
            .collect::<Option<_>>()?;

        let name_to_id: HashMap<String, NodeId> = node_lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.name.clone(), NodeId::from_usize(i)))
            .collect();

        let nodes = node_lines
            .into_iter()
            .map(|line| {
                Some(Node {
                    left: *name_to_id.get(&line.left)?,
                    right: *name_to_id.get(&line.right)?,
                    name: line.name,
                })
            })
            .collect::<Option<IndexVec<NodeId, Node>>>()?;

        Some(Self {
            turns,
            name_to_id,
            nodes,
        })
    }

    #[inline]
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    fn step(&self, id: NodeId, turn: Turn) -> NodeId {
        let node = &self.nodes[id];
        match turn {
            Turn::Left => node.left,
            Turn::Right => node.right,
        }
    }

    /// Number of steps from `start` until the first node matching `is_end`.
    ///
    /// Returns `None` once every (node, instruction) pair has been seen
    /// without reaching an end node, since the walk is then a loop.
    pub fn steps_until(&self, start: NodeId, is_end: impl Fn(&Node) -> bool) -> Option<u64> {
        let max_steps = self.nodes.len() * self.turns.len();
        let mut id = start;
        for (steps, &turn) in self.turns.iter().cycle().take(max_steps).enumerate() {
            id = self.step(id, turn);
            if is_end(&self.nodes[id]) {
                debugln!(
                    "{} -> {} in {} steps",
                    self.nodes[start].name,
                    self.nodes[id].name,
                    steps + 1
                );
                return Some(steps as u64 + 1);
            }
        }
        None
    }
}

/// Returns the number of steps from `AAA` to `ZZZ`.
pub fn part_one(input: &str) -> Option<u64> {
    let network = Network::parse(input)?;
    let start = network.node_by_name("AAA")?;
    network.steps_until(start, |node| node.name == "ZZZ")
}

/// Returns the number of steps until every ghost stands on a `..Z` node.
///
/// Each ghost loops back to its first `..Z` node with the same period, so the
/// ghosts line up at the least common multiple of their first arrivals.
pub fn part_two(input: &str) -> Option<u64> {
    let network = Network::parse(input)?;
    let arrivals = network
        .nodes
        .iter_enumerated()
        .filter(|(_, node)| node.name.ends_with('A'))
        .map(|(id, _)| network.steps_until(id, |node| node.name.ends_with('Z')))
        .collect::<Option<Vec<u64>>>()?;
    math::lcm_all(arrivals)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 8);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPEATING_INPUT: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const GHOST_INPUT: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 8);
        assert_eq!(part_one(&input), Some(2));
    }

    #[test]
    fn test_part_one_repeating_instructions() {
        assert_eq!(part_one(REPEATING_INPUT), Some(6));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(GHOST_INPUT), Some(6));
    }

    #[test]
    fn test_parse_node() {
        assert_eq!(
            parse::from_str_ok("AAA = (BBB, CCC)", NodeLine::parser()),
            Some(NodeLine {
                name: "AAA".to_owned(),
                left: "BBB".to_owned(),
                right: "CCC".to_owned(),
            })
        );
    }

    #[test]
    fn test_unreachable_end() {
        let input = "L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        assert_eq!(part_one(input), None);
    }

    #[test]
    fn test_unknown_node() {
        let input = "L\n\nAAA = (BBB, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        assert_eq!(part_one(input), None);
    }
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    fn name<Input>() -> impl Parser<Input, Output = String>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::many1(c::char::alpha_num())
    }

    impl NodeLine {
        // "AAA = (BBB, CCC)"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                name(),
                c::string(" = ("),
                name(),
                c::string(", "),
                name(),
                c::token(')'),
            )
                .map(|(name, _, left, _, right, _)| NodeLine { name, left, right })
        }
    }
}
