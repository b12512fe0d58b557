#![doc = include_str!("../puzzles/11.md")]

use advent_of_code_2023::{
    debugln,
    helpers::{CharGrid, Pos},
};

struct Image {
    rows: usize,
    cols: usize,
    galaxies: Vec<Pos>,
}

impl Image {
    pub fn parse(input: &str) -> Option<Self> {
        let grid = CharGrid::parse(input)?;
        let galaxies = grid
            .positions()
            .filter(|&(_, cell)| cell == b'#')
            .map(|(pos, _)| pos)
            .collect();
        Some(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            galaxies,
        })
    }

    /// Sum of the distances between every pair of galaxies, with every empty
    /// row and column counting `factor` times.
    pub fn distance_sum(&self, factor: i64) -> i64 {
        let xs = self.galaxies.iter().map(|pos| pos.x as usize);
        let ys = self.galaxies.iter().map(|pos| pos.y as usize);
        expand(xs, self.cols, factor) + expand(ys, self.rows, factor)
    }
}

/// Expands one axis and sums the pairwise distances along it.
///
/// Manhattan distance splits into one term per axis, so the axes can be
/// handled independently.
fn expand(coords: impl Iterator<Item = usize>, len: usize, factor: i64) -> i64 {
    let coords: Vec<usize> = coords.collect();

    let mut occupied = vec![false; len];
    for &c in coords.iter() {
        occupied[c] = true;
    }

    let mut expanded = Vec::with_capacity(len);
    let mut next = 0;
    for is_occupied in occupied {
        expanded.push(next);
        next += if is_occupied { 1 } else { factor };
    }

    let mut positions: Vec<i64> = coords.iter().map(|&c| expanded[c]).collect();
    positions.sort_unstable();

    // Each position is the far end of one pair with every position before it.
    let mut before = 0;
    let mut total = 0;
    for (i, &position) in positions.iter().enumerate() {
        total += position * i as i64 - before;
        before += position;
    }
    total
}

/// Returns the sum of distances with empty space doubled.
pub fn part_one(input: &str) -> Option<i64> {
    let image = Image::parse(input)?;
    debugln!("{} galaxies", image.galaxies.len());
    Some(image.distance_sum(2))
}

/// Returns the sum of distances with empty space a million times larger.
pub fn part_two(input: &str) -> Option<i64> {
    let image = Image::parse(input)?;
    Some(image.distance_sum(1_000_000))
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 11);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 11);
        assert_eq!(part_one(&input), Some(374));
    }

    #[test]
    fn test_expansion_factors() {
        let input = advent_of_code_2023::read_file("examples", 11);
        let image = Image::parse(&input).unwrap();
        assert_eq!(image.distance_sum(10), 1030);
        assert_eq!(image.distance_sum(100), 8410);
    }

    #[test]
    fn test_single_pair() {
        // One empty column and one empty row between the galaxies.
        let image = Image::parse("#..\n...\n..#").unwrap();
        assert_eq!(image.distance_sum(1), 4);
        assert_eq!(image.distance_sum(2), 6);
        assert_eq!(image.distance_sum(1_000_000), 2_000_002);
    }

    #[test]
    fn test_ragged_image() {
        assert_eq!(part_one("#..\n..\n..#"), None);
    }
}
