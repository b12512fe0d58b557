#![doc = include_str!("../puzzles/02.md")]

use std::fmt;

use advent_of_code_2023::{debugln, helpers::parse};

/// A number of cubes of each colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Cubes {
    /// What the bag holds in part one.
    const BAG: Cubes = Cubes {
        red: 12,
        green: 13,
        blue: 14,
    };

    /// Returns true if these cubes could have been drawn from `bag`.
    #[inline]
    pub fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The per-colour maximum of two sets of cubes.
    #[inline]
    pub fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    #[inline]
    pub fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

impl fmt::Display for Cubes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} red, {} green, {} blue",
            self.red, self.green, self.blue
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Game {
    pub id: u32,
    pub reveals: Vec<Cubes>,
}

impl Game {
    pub fn is_possible_with(&self, bag: &Cubes) -> bool {
        self.reveals.iter().all(|reveal| reveal.fits_in(bag))
    }

    /// The fewest cubes of each colour the bag must hold for this game.
    pub fn minimum_bag(&self) -> Cubes {
        self.reveals
            .iter()
            .fold(Cubes::default(), |bag, &reveal| bag.max(reveal))
    }
}

fn parse_games(input: &str) -> Option<Vec<Game>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| parse::from_str_ok(line, Game::parser()))
        .collect()
}

/// Returns the sum of the ids of the games possible with [`Cubes::BAG`].
pub fn part_one(input: &str) -> Option<u32> {
    let games = parse_games(input)?;
    let sum = games
        .iter()
        .filter(|game| game.is_possible_with(&Cubes::BAG))
        .map(|game| {
            debugln!("Game {} is possible", game.id);
            game.id
        })
        .sum();
    Some(sum)
}

/// Returns the sum of the powers of each game's minimum bag.
pub fn part_two(input: &str) -> Option<u32> {
    let games = parse_games(input)?;
    let sum = games
        .iter()
        .map(|game| {
            let bag = game.minimum_bag();
            debugln!("Game {}: {bag}", game.id);
            bag.power()
        })
        .sum();
    Some(sum)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 2);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 2);
        assert_eq!(part_one(&input), Some(8));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 2);
        assert_eq!(part_two(&input), Some(2286));
    }

    #[test]
    fn test_parse_game() {
        let game = parse::from_str_ok("Game 11: 3 blue, 4 red; 2 green", Game::parser());
        assert_eq!(
            game,
            Some(Game {
                id: 11,
                reveals: vec![
                    Cubes {
                        red: 4,
                        green: 0,
                        blue: 3
                    },
                    Cubes {
                        red: 0,
                        green: 2,
                        blue: 0
                    },
                ],
            })
        );
    }

    #[test]
    fn test_malformed_game() {
        assert_eq!(part_one("Game 1: 3 purple"), None);
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

    #[derive(Debug, Clone, Copy)]
    enum Colour {
        Red,
        Green,
        Blue,
    }

    impl Cubes {
        fn from_counts(counts: Vec<(u32, Colour)>) -> Self {
            let mut cubes = Cubes::default();
            for (count, colour) in counts {
                match colour {
                    Colour::Red => cubes.red += count,
                    Colour::Green => cubes.green += count,
                    Colour::Blue => cubes.blue += count,
                }
            }
            cubes
        }

        // "3 blue, 4 red"
        fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let colour = c::choice((
                c::string("red").map(|_| Colour::Red),
                c::string("green").map(|_| Colour::Green),
                c::string("blue").map(|_| Colour::Blue),
            ));

            // "3 blue"
            let count = (parse::decimal_integer(), c::token(' '), colour)
                .map(|(count, _, colour)| (count, colour));

            c::sep_by1(count, c::string(", ")).map(Cubes::from_counts)
        }
    }

    impl Game {
        // "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let reveals = c::sep_by1(Cubes::parser(), c::string("; "));

            (
                c::string("Game "),
                parse::decimal_integer(),
                c::string(": "),
                reveals,
            )
                .map(|(_, id, _, reveals)| Game { id, reveals })
        }
    }
}
