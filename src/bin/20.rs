#![doc = include_str!("../puzzles/20.md")]

use std::collections::{HashMap, VecDeque};

use advent_of_code_2023::{
    debugln,
    helpers::{math, parse},
};

const PRESSES: usize = 1000;
/// Presses to try before giving up on reaching `rx`.
const MAX_PRESSES: u64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ModuleId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pulse {
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Broadcaster,
    FlipFlop { on: bool },
    Conjunction { memory: Vec<(ModuleId, Pulse)> },
    /// A destination that is never declared, such as `output` or `rx`.
    Sink,
}

impl Kind {
    /// Handles `pulse` coming from `from`, returning the pulse to send on.
    fn receive(&mut self, from: Option<ModuleId>, pulse: Pulse) -> Option<Pulse> {
        match self {
            Kind::Broadcaster => Some(pulse),
            Kind::FlipFlop { .. } if pulse == Pulse::High => None,
            Kind::FlipFlop { on } => {
                *on = !*on;
                Some(if *on { Pulse::High } else { Pulse::Low })
            }
            Kind::Conjunction { memory } => {
                if let Some(slot) = memory.iter_mut().find(|(input, _)| Some(*input) == from) {
                    slot.1 = pulse;
                }
                let all_high = memory.iter().all(|&(_, last)| last == Pulse::High);
                Some(if all_high { Pulse::Low } else { Pulse::High })
            }
            Kind::Sink => None,
        }
    }
}

/// A module line as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModuleLine {
    pub prefix: Option<char>,
    pub name: String,
    pub targets: Vec<String>,
}

#[derive(Debug, Clone)]
struct Module {
    pub name: String,
    pub kind: Kind,
    pub targets: Vec<ModuleId>,
}

/// A pulse on its way from one module to another. `from` is `None` for the
/// button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Signal {
    pub from: Option<ModuleId>,
    pub to: ModuleId,
    pub pulse: Pulse,
}

#[derive(Debug)]
struct Network {
    name_to_id: HashMap<String, ModuleId>,
    /// Indexed by [`ModuleId`].
    modules: Vec<Module>,
    broadcaster: ModuleId,
}

impl Network {
    pub fn new(lines: Vec<ModuleLine>) -> Option<Self> {
        let mut name_to_id = HashMap::new();
        let mut modules = Vec::new();

        for line in lines.iter() {
            let kind = match (line.prefix, line.name.as_str()) {
                (None, "broadcaster") => Kind::Broadcaster,
                (Some('%'), _) => Kind::FlipFlop { on: false },
                (Some('&'), _) => Kind::Conjunction { memory: Vec::new() },
                _ => return None,
            };
            if name_to_id.insert(line.name.clone(), ModuleId(modules.len())).is_some() {
                return None;
            }
            modules.push(Module {
                name: line.name.clone(),
                kind,
                targets: Vec::new(),
            });
        }

        for (i, line) in lines.into_iter().enumerate() {
            for target in line.targets {
                let id = *name_to_id.entry(target.clone()).or_insert_with(|| {
                    modules.push(Module {
                        name: target,
                        kind: Kind::Sink,
                        targets: Vec::new(),
                    });
                    ModuleId(modules.len() - 1)
                });
                modules[i].targets.push(id);
            }
        }

        // Conjunctions start out remembering a low pulse from every input.
        for i in 0..modules.len() {
            for target in modules[i].targets.clone() {
                let Kind::Conjunction { memory } = &mut modules[target.0].kind else {
                    continue;
                };
                if memory.iter().all(|&(input, _)| input != ModuleId(i)) {
                    memory.push((ModuleId(i), Pulse::Low));
                }
            }
        }

        let broadcaster = *name_to_id.get("broadcaster")?;
        Some(Self {
            name_to_id,
            modules,
            broadcaster,
        })
    }

    #[inline]
    pub fn module_by_name(&self, name: &str) -> Option<ModuleId> {
        self.name_to_id.get(name).copied()
    }

    /// Modules with `id` among their targets.
    pub fn inputs(&self, id: ModuleId) -> Vec<ModuleId> {
        (0..self.modules.len())
            .map(ModuleId)
            .filter(|input| self.modules[input.0].targets.contains(&id))
            .collect()
    }

    /// Pushes the button once, showing every pulse to `observe` as it is
    /// delivered.
    pub fn press(&mut self, mut observe: impl FnMut(Signal)) {
        let mut queue = VecDeque::from([Signal {
            from: None,
            to: self.broadcaster,
            pulse: Pulse::Low,
        }]);

        while let Some(signal) = queue.pop_front() {
            observe(signal);
            let module = &mut self.modules[signal.to.0];
            let Some(pulse) = module.kind.receive(signal.from, signal.pulse) else {
                continue;
            };
            queue.extend(module.targets.iter().map(|&to| Signal {
                from: Some(signal.to),
                to,
                pulse,
            }));
        }
    }
}

fn parse_network(input: &str) -> Option<Network> {
    let lines = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| parse::from_str_ok(line, ModuleLine::parser()))
        .collect::<Option<_>>()?;
    Network::new(lines)
}

/// Returns the number of low pulses times the number of high pulses sent
/// during 1000 button presses.
pub fn part_one(input: &str) -> Option<u64> {
    let mut network = parse_network(input)?;
    let (mut low, mut high) = (0, 0);
    for _ in 0..PRESSES {
        network.press(|signal| match signal.pulse {
            Pulse::Low => low += 1,
            Pulse::High => high += 1,
        });
    }
    debugln!("{low} low pulses, {high} high pulses");
    Some(low * high)
}

/// Returns the fewest button presses that deliver a low pulse to `rx`.
///
/// `rx` is fed by a single conjunction, which sends low once all of its
/// inputs have just sent it high. Each input does so periodically, so the
/// answer is the least common multiple of the first press on which each
/// input sends a high pulse.
pub fn part_two(input: &str) -> Option<u64> {
    let mut network = parse_network(input)?;
    let rx = network.module_by_name("rx")?;

    let [feeder] = network.inputs(rx)[..] else {
        return None;
    };
    if !matches!(network.modules[feeder.0].kind, Kind::Conjunction { .. }) {
        return None;
    }

    let mut first_high: HashMap<ModuleId, Option<u64>> = network
        .inputs(feeder)
        .into_iter()
        .map(|input| (input, None))
        .collect();

    for presses in 1..=MAX_PRESSES {
        network.press(|signal| {
            if signal.to != feeder || signal.pulse != Pulse::High {
                return;
            }
            if let Some(first) = signal.from.and_then(|from| first_high.get_mut(&from)) {
                first.get_or_insert(presses);
            }
        });

        if first_high.values().all(Option::is_some) {
            for (input, first) in first_high.iter() {
                debugln!("{} first sends high on press {first:?}", network.modules[input.0].name);
            }
            return math::lcm_all(first_high.into_values().flatten());
        }
    }

    None
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 20);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERESTING: &str = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";

    const COUNTERS: &str = "\
broadcaster -> a, x
%a -> b
%b -> c
%c -> ia
&ia -> hub
%x -> y
%y -> ix
&ix -> hub
&hub -> rx
";

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 20);
        assert_eq!(part_one(&input), Some(32000000));
        assert_eq!(part_one(INTERESTING), Some(11687500));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(COUNTERS), Some(8));
    }

    #[test]
    fn test_part_two_without_rx() {
        let input = advent_of_code_2023::read_file("examples", 20);
        assert_eq!(part_two(&input), None);
        assert_eq!(part_two(INTERESTING), None);
    }

    #[test]
    fn test_single_press() {
        let mut network = parse_network(INTERESTING).unwrap();
        let mut pulses = Vec::new();
        network.press(|signal| pulses.push(signal.pulse));
        assert_eq!(pulses.len(), 8);
        assert_eq!(pulses.iter().filter(|&&pulse| pulse == Pulse::High).count(), 4);

        let con = network.module_by_name("con").unwrap();
        assert_eq!(network.inputs(con).len(), 2);
    }

    #[test]
    fn test_repeated_target() {
        let input = "broadcaster -> a\n%a -> con, con\n&con -> output\n";
        let mut network = parse_network(input).unwrap();
        let con = network.module_by_name("con").unwrap();
        assert_eq!(
            network.modules[con.0].kind,
            Kind::Conjunction {
                memory: vec![(network.module_by_name("a").unwrap(), Pulse::Low)]
            }
        );

        // `a` turns on and sends high twice, so `con` answers low both times.
        let mut from_con = Vec::new();
        network.press(|signal| {
            if signal.from == Some(con) {
                from_con.push(signal.pulse);
            }
        });
        assert_eq!(from_con, vec![Pulse::Low, Pulse::Low]);
    }

    #[test]
    fn test_parse_module() {
        assert_eq!(
            parse::from_str_ok("%a -> inv, con", ModuleLine::parser()),
            Some(ModuleLine {
                prefix: Some('%'),
                name: "a".to_owned(),
                targets: vec!["inv".to_owned(), "con".to_owned()],
            })
        );
        assert_eq!(
            parse::from_str_ok("broadcaster -> a", ModuleLine::parser()).map(|line| line.prefix),
            Some(None)
        );
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
        c::many1(c::char::letter())
    }

    impl ModuleLine {
        // "%a -> inv, con"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::optional(c::one_of("%&".chars())),
                name(),
                c::string(" -> "),
                c::sep_by1(name(), c::string(", ")),
            )
                .map(|(prefix, name, _, targets)| ModuleLine {
                    prefix,
                    name,
                    targets,
                })
        }
    }
}
