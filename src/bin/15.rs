#![doc = include_str!("../puzzles/15.md")]

use std::fmt;

use advent_of_code_2023::{debugln, helpers::parse};

const BOXES: usize = 256;

fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |value, byte| (value + byte as usize) * 17 % 256)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Insert { label: String, focal_length: u32 },
    Remove { label: String },
}

impl Step {
    pub fn label(&self) -> &str {
        match self {
            Step::Insert { label, .. } | Step::Remove { label } => label,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Insert {
                label,
                focal_length,
            } => write!(f, "{label}={focal_length}"),
            Step::Remove { label } => write!(f, "{label}-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Lens {
    pub label: String,
    pub focal_length: u32,
}

/// The 256 boxes, each holding its lenses front to back.
struct Boxes {
    boxes: Vec<Vec<Lens>>,
}

impl Boxes {
    pub fn new() -> Self {
        Self {
            boxes: vec![Vec::new(); BOXES],
        }
    }

    pub fn apply(&mut self, step: Step) {
        let lenses = &mut self.boxes[hash(step.label())];
        let slot = lenses.iter().position(|lens| lens.label == step.label());
        match (step, slot) {
            (Step::Insert { focal_length, .. }, Some(slot)) => {
                lenses[slot].focal_length = focal_length;
            }
            (Step::Insert { label, focal_length }, None) => {
                lenses.push(Lens {
                    label,
                    focal_length,
                });
            }
            (Step::Remove { .. }, Some(slot)) => {
                lenses.remove(slot);
            }
            (Step::Remove { .. }, None) => {}
        }
    }

    pub fn focusing_power(&self) -> usize {
        self.boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, lens)| (b + 1) * (slot + 1) * lens.focal_length as usize)
            })
            .sum()
    }
}

impl fmt::Display for Boxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (b, lenses) in self.boxes.iter().enumerate() {
            if lenses.is_empty() {
                continue;
            }
            write!(f, "Box {b}:")?;
            for lens in lenses {
                write!(f, " [{} {}]", lens.label, lens.focal_length)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The steps of the sequence, with newlines dropped.
fn steps(input: &str) -> Vec<String> {
    let sequence: String = input.chars().filter(|&c| c != '\n' && c != '\r').collect();
    sequence
        .split(',')
        .filter(|step| !step.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns the sum of the HASH of every step.
pub fn part_one(input: &str) -> Option<usize> {
    Some(steps(input).iter().map(|step| hash(step)).sum())
}

/// Returns the focusing power once every step has been applied.
pub fn part_two(input: &str) -> Option<usize> {
    let mut boxes = Boxes::new();
    for step in steps(input) {
        let step = parse::from_str_ok(&step, Step::parser())?;
        boxes.apply(step);
    }
    debugln!("{boxes}");
    Some(boxes.focusing_power())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 15);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    use maplit::hashmap;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 15);
        assert_eq!(part_one(&input), Some(1320));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 15);
        assert_eq!(part_two(&input), Some(145));
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
        assert_eq!(hash("pc"), 3);
    }

    #[test]
    fn test_boxes() {
        let input = advent_of_code_2023::read_file("examples", 15);
        let mut boxes = Boxes::new();
        for step in steps(&input) {
            boxes.apply(parse::from_str_ok(&step, Step::parser()).unwrap());
        }

        let lens = |label: &str, focal_length| Lens {
            label: label.to_owned(),
            focal_length,
        };
        let expected = hashmap! {
            0 => vec![lens("rn", 1), lens("cm", 2)],
            3 => vec![lens("ot", 7), lens("ab", 5), lens("pc", 6)],
        };
        for (b, lenses) in boxes.boxes.iter().enumerate() {
            let empty = Vec::new();
            assert_eq!(lenses, expected.get(&b).unwrap_or(&empty), "box {b}");
        }
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(
            parse::from_str_ok("qp=3", Step::parser()),
            Some(Step::Insert {
                label: "qp".to_owned(),
                focal_length: 3,
            })
        );
        assert_eq!(
            parse::from_str_ok("cm-", Step::parser()).map(|step| step.to_string()),
            Some("cm-".to_owned())
        );
        assert_eq!(parse::from_str_ok("cm", Step::parser()), None);
    }
}

mod parsing {
    use super::*;

    use advent_of_code_2023::helpers::parse;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Step {
        // "rn=1" or "cm-"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let label = c::many1::<String, _, _>(c::char::letter());
            let insert = c::token('=')
                .with(parse::decimal_integer())
                .map(Some);
            let remove = c::token('-').map(|_| None);

            (label, insert.or(remove)).map(|(label, focal_length)| match focal_length {
                Some(focal_length) => Step::Insert {
                    label,
                    focal_length,
                },
                None => Step::Remove { label },
            })
        }
    }
}
