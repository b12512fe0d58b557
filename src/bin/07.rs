#![doc = include_str!("../puzzles/07.md")]

use std::fmt;

use advent_of_code_2023::debugln;
use itertools::Itertools;

const CARDS: &[u8; 13] = b"23456789TJQKA";
const JOKER: u8 = b'J';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classifies a hand from how many of each card it holds.
    ///
    /// Jokers join whichever group is already the largest; that is always the
    /// best use for them.
    fn from_counts(mut counts: Vec<usize>, jokers: usize) -> Self {
        counts.sort_unstable_by(|a, b| b.cmp(a));
        match counts.first_mut() {
            Some(largest) => *largest += jokers,
            None => counts.push(jokers),
        }

        match counts[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hand {
    pub cards: [u8; 5],
    pub bid: u64,
}

impl Hand {
    pub fn hand_type(&self, with_jokers: bool) -> HandType {
        let counts = self
            .cards
            .iter()
            .filter(|&&card| !(with_jokers && card == JOKER))
            .counts();
        let jokers = 5 - counts.values().sum::<usize>();
        HandType::from_counts(counts.into_values().collect(), jokers)
    }

    /// The strength of each card, for breaking ties between hands of the same
    /// type.
    pub fn strengths(&self, with_jokers: bool) -> [usize; 5] {
        self.cards.map(|card| match card {
            JOKER if with_jokers => 0,
            card => CARDS.iter().position(|&c| c == card).map_or(0, |i| i + 1),
        })
    }

    pub fn parse(line: &str) -> Option<Self> {
        let (cards, bid) = line.split_once(' ')?;
        let cards: [u8; 5] = cards.as_bytes().try_into().ok()?;
        if !cards.iter().all(|card| CARDS.contains(card)) {
            return None;
        }
        let bid = bid.trim().parse().ok()?;
        Some(Self { cards, bid })
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.cards {
            write!(f, "{}", card as char)?;
        }
        write!(f, " {}", self.bid)
    }
}

fn total_winnings(input: &str, with_jokers: bool) -> Option<u64> {
    let mut hands: Vec<Hand> = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(Hand::parse)
        .collect::<Option<_>>()?;

    hands.sort_by_cached_key(|hand| (hand.hand_type(with_jokers), hand.strengths(with_jokers)));

    let winnings = hands
        .iter()
        .zip(1..)
        .map(|(hand, rank)| {
            debugln!("{rank:>4}: {hand} ({:?})", hand.hand_type(with_jokers));
            rank * hand.bid
        })
        .sum();
    Some(winnings)
}

/// Returns the total winnings.
pub fn part_one(input: &str) -> Option<u64> {
    total_winnings(input, false)
}

/// Returns the total winnings when `J` is a joker.
pub fn part_two(input: &str) -> Option<u64> {
    total_winnings(input, true)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 7);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}
