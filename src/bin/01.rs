#![doc = include_str!("../puzzles/01.md")]

use advent_of_code_2023::debugln;

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Returns the digit starting at byte `i` of `line`, if any.
///
/// Spelled out digits are only recognized if `spelled` is true.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line[i..];
    let first = rest.bytes().next()?;
    if first.is_ascii_digit() {
        return Some(u32::from(first - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED_DIGITS
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|index| index as u32 + 1)
}

/// The calibration value of a line: its first and last digit as a two digit
/// number.
///
/// Scans from both ends so that overlapping spelled digits (`"twone"`) are
/// resolved the same way as searching for the first and last occurrence.
fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let indices = || line.char_indices().map(|(i, _)| i);
    let first = indices().find_map(|i| digit_at(line, i, spelled))?;
    let last = indices().rev().find_map(|i| digit_at(line, i, spelled))?;
    debugln!("{line}: {first}{last}");
    Some(first * 10 + last)
}

fn calibration_sum(input: &str, spelled: bool) -> Option<u32> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| calibration_value(line, spelled))
        .sum()
}

/// Returns the sum of the calibration values made of plain digits.
pub fn part_one(input: &str) -> Option<u32> {
    calibration_sum(input, false)
}

/// Returns the sum of the calibration values, counting spelled out digits.
pub fn part_two(input: &str) -> Option<u32> {
    calibration_sum(input, true)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 1);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPELLED_EXAMPLE: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 1);
        assert_eq!(part_one(&input), Some(142));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(SPELLED_EXAMPLE), Some(281));
    }

    #[test]
    fn test_part_two_on_plain_digits() {
        let input = advent_of_code_2023::read_file("examples", 1);
        assert_eq!(part_two(&input), Some(142));
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibration_value("eightwo", true), Some(82));
        assert_eq!(calibration_value("twone", true), Some(21));
        assert_eq!(calibration_value("oneight", false), None);
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(part_one("abc\n1\n"), None);
    }
}
