#![doc = include_str!("../puzzles/04.md")]

use std::collections::HashSet;

use advent_of_code_2023::{debugln, helpers::parse};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Card {
    pub id: u32,
    pub winning: Vec<u32>,
    pub numbers: Vec<u32>,
}

impl Card {
    pub fn matches(&self) -> usize {
        let winning: HashSet<u32> = self.winning.iter().copied().collect();
        self.numbers
            .iter()
            .filter(|number| winning.contains(number))
            .count()
    }

    /// Doubles once per match after the first; `None` if that overflows.
    pub fn points(&self) -> Option<u32> {
        match self.matches() {
            0 => Some(0),
            n => 1_u32.checked_shl(u32::try_from(n - 1).ok()?),
        }
    }
}

fn parse_cards(input: &str) -> Option<Vec<Card>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| parse::from_str_ok(line, Card::parser()))
        .collect()
}

/// Returns the total points of all cards.
pub fn part_one(input: &str) -> Option<u32> {
    let cards = parse_cards(input)?;
    cards.iter().map(Card::points).sum()
}

/// Returns the number of cards held once every card has been scratched.
pub fn part_two(input: &str) -> Option<u64> {
    let cards = parse_cards(input)?;

    // Copies only ever go to later cards, so one forward pass settles them.
    let mut copies = vec![1_u64; cards.len()];
    for (i, card) in cards.iter().enumerate() {
        let won = card.matches();
        let end = (i + 1 + won).min(cards.len());
        debugln!("Card {}: {} copies, wins {won} cards", card.id, copies[i]);
        for j in i + 1..end {
            copies[j] += copies[i];
        }
    }

    Some(copies.iter().sum())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 4);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 4);
        assert_eq!(part_one(&input), Some(13));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 4);
        assert_eq!(part_two(&input), Some(30));
    }

    #[test]
    fn test_parse_card() {
        let card = parse::from_str_ok("Card  12:  1 21 | 69  1", Card::parser());
        assert_eq!(
            card,
            Some(Card {
                id: 12,
                winning: vec![1, 21],
                numbers: vec![69, 1],
            })
        );
        assert_eq!(card.and_then(|card| card.points()), Some(1));
    }

    #[test]
    fn test_too_many_matches() {
        let numbers = (1..=40).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let input = format!("Card 1: {numbers} | {numbers}\n");
        assert_eq!(part_one(&input), None);
        assert_eq!(part_two(&input), Some(1));
    }

    #[test]
    fn test_copies_stop_at_last_card() {
        let input = "Card 1: 1 2 | 1 2\nCard 2: 3 | 4\n";
        assert_eq!(part_two(input), Some(3));
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

    impl Card {
        // "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let bar = (c::skip_many(c::token(' ')), c::token('|'));

            (
                c::string("Card"),
                parse::spaces1(),
                parse::decimal_integer(),
                c::token(':'),
                parse::integers(),
                bar,
                parse::integers(),
            )
                .map(|(_, _, id, _, winning, _, numbers)| Card {
                    id,
                    winning,
                    numbers,
                })
        }
    }
}
