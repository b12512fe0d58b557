#![doc = include_str!("../puzzles/19.md")]

use std::collections::HashMap;
use std::ops::Range;

use advent_of_code_2023::{
    debugln,
    helpers::{parse, Itertools as _},
};

const RATINGS: Range<u64> = 1..4001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    X,
    M,
    A,
    S,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Accept,
    Reject,
    Workflow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Less(Category, u64),
    Greater(Category, u64),
}

impl Condition {
    pub fn matches(self, part: &Part) -> bool {
        match self {
            Condition::Less(category, value) => part.rating(category) < value,
            Condition::Greater(category, value) => part.rating(category) > value,
        }
    }

    /// Splits `range` into the ratings matching the condition and the rest.
    pub fn split(self, range: Range<u64>) -> (Range<u64>, Range<u64>) {
        match self {
            Condition::Less(_, value) => (
                range.start..range.end.min(value),
                range.start.max(value)..range.end,
            ),
            Condition::Greater(_, value) => (
                range.start.max(value + 1)..range.end,
                range.start..range.end.min(value + 1),
            ),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Condition::Less(category, _) | Condition::Greater(category, _) => category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    /// `None` for the fallback rule at the end of a workflow.
    pub condition: Option<Condition>,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Workflow {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl Workflow {
    pub fn route(&self, part: &Part) -> Option<&Target> {
        self.rules
            .iter()
            .find(|rule| rule.condition.map_or(true, |condition| condition.matches(part)))
            .map(|rule| &rule.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Part {
    pub ratings: [u64; 4],
}

impl Part {
    #[inline]
    pub fn rating(&self, category: Category) -> u64 {
        self.ratings[category as usize]
    }

    pub fn total(&self) -> u64 {
        self.ratings.iter().sum()
    }
}

/// The ratings still possible, per category.
type Ranges = [Range<u64>; 4];

struct System {
    workflows: HashMap<String, Workflow>,
}

impl System {
    fn workflow(&self, name: &str) -> Option<&Workflow> {
        self.workflows.get(name)
    }

    /// Runs `part` through the workflows, starting at `in`.
    ///
    /// Returns `None` if it visits more workflows than there are, since it
    /// must then be going around in circles.
    pub fn accepts(&self, part: &Part) -> Option<bool> {
        let mut workflow = self.workflow("in")?;
        for _ in 0..=self.workflows.len() {
            match workflow.route(part)? {
                Target::Accept => return Some(true),
                Target::Reject => return Some(false),
                Target::Workflow(name) => workflow = self.workflow(name)?,
            }
        }
        None
    }

    /// Number of rating combinations within `ranges` that `target` accepts.
    fn accepted_combinations(
        &self,
        target: &Target,
        ranges: Ranges,
        depth: usize,
    ) -> Option<u64> {
        let name = match target {
            Target::Accept => {
                return Some(ranges.iter().map(|range| range.end - range.start).product());
            }
            Target::Reject => return Some(0),
            Target::Workflow(_) if depth > self.workflows.len() => return None,
            Target::Workflow(name) => name,
        };

        let mut total = 0;
        let mut rest = ranges;
        for rule in self.workflow(name)?.rules.iter() {
            let Some(condition) = rule.condition else {
                total += self.accepted_combinations(&rule.target, rest, depth + 1)?;
                break;
            };

            let i = condition.category() as usize;
            let (matching, remaining) = condition.split(rest[i].clone());
            if !matching.is_empty() {
                let mut matched = rest.clone();
                matched[i] = matching;
                total += self.accepted_combinations(&rule.target, matched, depth + 1)?;
            }
            if remaining.is_empty() {
                break;
            }
            rest[i] = remaining;
        }

        debugln!("{name}: {total}");
        Some(total)
    }
}

fn parse_input(input: &str) -> Option<(System, Vec<Part>)> {
    let blocks = input.lines().blocks();
    let [workflows, parts] = &blocks[..] else {
        return None;
    };

    let workflows = workflows
        .iter()
        .map(|line| {
            let workflow = parse::from_str_ok(line, Workflow::parser())?;
            Some((workflow.name.clone(), workflow))
        })
        .collect::<Option<_>>()?;
    let parts = parts
        .iter()
        .map(|line| parse::from_str_ok(line, Part::parser()))
        .collect::<Option<_>>()?;

    Some((System { workflows }, parts))
}

/// Returns the sum of the ratings of every accepted part.
pub fn part_one(input: &str) -> Option<u64> {
    let (system, parts) = parse_input(input)?;
    let mut total = 0;
    for part in parts.iter() {
        if system.accepts(part)? {
            total += part.total();
        }
    }
    Some(total)
}

/// Returns the number of accepted rating combinations.
pub fn part_two(input: &str) -> Option<u64> {
    let (system, _) = parse_input(input)?;
    let start = Target::Workflow("in".to_owned());
    let ranges = [RATINGS, RATINGS, RATINGS, RATINGS];
    system.accepted_combinations(&start, ranges, 0)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 19);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 19);
        assert_eq!(part_one(&input), Some(19114));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 19);
        assert_eq!(part_two(&input), Some(167409079868000));
    }

    #[test]
    fn test_parse_workflow() {
        let workflow = parse::from_str_ok("px{a<2006:qkq,m>2090:A,rfg}", Workflow::parser());
        assert_eq!(
            workflow,
            Some(Workflow {
                name: "px".to_owned(),
                rules: vec![
                    Rule {
                        condition: Some(Condition::Less(Category::A, 2006)),
                        target: Target::Workflow("qkq".to_owned()),
                    },
                    Rule {
                        condition: Some(Condition::Greater(Category::M, 2090)),
                        target: Target::Accept,
                    },
                    Rule {
                        condition: None,
                        target: Target::Workflow("rfg".to_owned()),
                    },
                ],
            })
        );
    }

    #[test]
    fn test_split() {
        let less = Condition::Less(Category::X, 10);
        assert_eq!(less.split(1..4001), (1..10, 10..4001));
        assert_eq!(less.split(20..30), (20..10, 20..30));

        let greater = Condition::Greater(Category::X, 10);
        assert_eq!(greater.split(1..4001), (11..4001, 1..11));
    }

    #[test]
    fn test_accept_everything() {
        let input = "in{A}\n\n{x=1,m=2,a=3,s=4}\n";
        assert_eq!(part_one(input), Some(10));
        assert_eq!(part_two(input), Some(4000_u64.pow(4)));
    }

    #[test]
    fn test_endless_workflows() {
        let input = "in{a}\na{in}\n\n{x=1,m=2,a=3,s=4}\n";
        assert_eq!(part_one(input), None);
        assert_eq!(part_two(input), None);
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

    fn category<Input>() -> impl Parser<Input, Output = Category>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::choice((
            c::token('x').map(|_| Category::X),
            c::token('m').map(|_| Category::M),
            c::token('a').map(|_| Category::A),
            c::token('s').map(|_| Category::S),
        ))
    }

    fn target<Input>() -> impl Parser<Input, Output = Target>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::many1(c::char::letter()).map(|name: String| match name.as_str() {
            "A" => Target::Accept,
            "R" => Target::Reject,
            _ => Target::Workflow(name),
        })
    }

    impl Rule {
        // "a<2006:qkq" or "rfg"
        fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let condition = (category(), c::one_of("<>".chars()), parse::decimal_integer()).map(
                |(category, op, value)| match op {
                    '<' => Condition::Less(category, value),
                    _ => Condition::Greater(category, value),
                },
            );
            let conditional = (condition, c::token(':'), target()).map(|(condition, _, target)| {
                Rule {
                    condition: Some(condition),
                    target,
                }
            });
            let fallback = target().map(|target| Rule {
                condition: None,
                target,
            });

            c::attempt(conditional).or(fallback)
        }
    }

    impl Workflow {
        // "px{a<2006:qkq,m>2090:A,rfg}"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::many1(c::char::letter()),
                c::token('{'),
                c::sep_by1(Rule::parser(), c::token(',')),
                c::token('}'),
            )
                .map(|(name, _, rules, _)| Workflow { name, rules })
        }
    }

    impl Part {
        // "{x=787,m=2655,a=1222,s=2876}"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("{x="),
                parse::decimal_integer(),
                c::string(",m="),
                parse::decimal_integer(),
                c::string(",a="),
                parse::decimal_integer(),
                c::string(",s="),
                parse::decimal_integer(),
                c::token('}'),
            )
                .map(|(_, x, _, m, _, a, _, s, _)| Part {
                    ratings: [x, m, a, s],
                })
        }
    }
}
