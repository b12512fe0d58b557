#![doc = include_str!("../puzzles/18.md")]

use advent_of_code_2023::{
    debugln,
    helpers::{math, parse, Direction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dig {
    pub dir: Direction,
    pub meters: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Instruction {
    pub dig: Dig,
    /// The six hex digits of the colour code.
    pub color: String,
}

impl Instruction {
    /// The instruction hidden in the colour code.
    pub fn decode_color(&self) -> Option<Dig> {
        if self.color.len() != 6 {
            return None;
        }
        let (meters, dir) = self.color.split_at(5);
        let meters = i64::from_str_radix(meters, 16).ok()?;
        let dir = match dir {
            "0" => Direction::Right,
            "1" => Direction::Down,
            "2" => Direction::Left,
            "3" => Direction::Up,
            _ => return None,
        };
        Some(Dig { dir, meters })
    }
}

/// The volume of the lagoon dug by following `plan`: the trench itself plus
/// everything it encloses.
fn lagoon_volume(plan: impl IntoIterator<Item = Dig>) -> i64 {
    let mut corner = (0, 0);
    let mut corners = Vec::new();
    let mut trench = 0;
    for dig in plan {
        corners.push(corner);
        let offset = dig.dir.offset();
        corner.0 += offset.x as i64 * dig.meters;
        corner.1 += offset.y as i64 * dig.meters;
        trench += dig.meters;
    }

    let inside = math::interior_points(&corners, trench);
    debugln!("{} corners, trench {trench}, inside {inside}", corners.len());
    inside + trench
}

fn parse_plan(input: &str) -> Option<Vec<Instruction>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| parse::from_str_ok(line, Instruction::parser()))
        .collect()
}

/// Returns the volume of the lagoon.
pub fn part_one(input: &str) -> Option<i64> {
    let plan = parse_plan(input)?;
    Some(lagoon_volume(plan.iter().map(|instruction| instruction.dig)))
}

/// Returns the volume of the lagoon dug by the colour codes.
pub fn part_two(input: &str) -> Option<i64> {
    let plan = parse_plan(input)?;
    let digs = plan
        .iter()
        .map(Instruction::decode_color)
        .collect::<Option<Vec<_>>>()?;
    Some(lagoon_volume(digs))
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 18);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 18);
        assert_eq!(part_one(&input), Some(62));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 18);
        assert_eq!(part_two(&input), Some(952408144115));
    }

    #[test]
    fn test_parse_instruction() {
        let instruction = parse::from_str_ok("R 6 (#70c710)", Instruction::parser()).unwrap();
        assert_eq!(
            instruction.dig,
            Dig {
                dir: Direction::Right,
                meters: 6
            }
        );
        assert_eq!(
            instruction.decode_color(),
            Some(Dig {
                dir: Direction::Right,
                meters: 461937
            })
        );
        assert_eq!(parse::from_str_ok("X 6 (#70c710)", Instruction::parser()), None);
    }

    #[test]
    fn test_negative_distance() {
        let input = "R -2 (#000000)\nD 2 (#000000)\nL 2 (#000000)\nU 2 (#000000)\n";
        assert_eq!(part_one(input), None);
        assert_eq!(part_two(input), None);
    }

    #[test]
    fn test_square() {
        let input = "R 2 (#000000)\nD 2 (#000000)\nL 2 (#000000)\nU 2 (#000000)\n";
        assert_eq!(part_one(input), Some(9));
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

    fn direction<Input>() -> impl Parser<Input, Output = Direction>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::choice((
            c::token('U').map(|_| Direction::Up),
            c::token('D').map(|_| Direction::Down),
            c::token('L').map(|_| Direction::Left),
            c::token('R').map(|_| Direction::Right),
        ))
    }

    impl Instruction {
        // "R 6 (#70c710)"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let color = c::count_min_max::<String, _, _>(6, 6, c::char::hex_digit());

            (
                direction(),
                parse::spaces1(),
                parse::decimal_integer::<u32, _>(),
                c::string(" (#"),
                color,
                c::token(')'),
            )
                .map(|(dir, _, meters, _, color, _)| Instruction {
                    dig: Dig {
                        dir,
                        meters: i64::from(meters),
                    },
                    color,
                })
        }
    }
}
