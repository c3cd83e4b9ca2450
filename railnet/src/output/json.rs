use failure::Error;
use crate::input::network::Network;
use crate::movement::Schedule;
use std::io;

/// Writes the schedule as a JSON document:
///
/// `{ "turns": [[{ "train": 1, "station": "b" }, ...], ...], "stranded": [] }`
pub fn json_schedule<W: io::Write>(network: &Network,
                                   schedule: &Schedule,
                                   f: &mut W)
                                   -> Result<(), Error> {
    write!(f, "{{ \"turns\": [")?;
    let mut first_turn = true;
    for turn in &schedule.turns {
        if first_turn { first_turn = false; } else { write!(f, ",")?; }
        write!(f, "\n  [")?;
        let mut first = true;
        for m in turn {
            if first { first = false; } else { write!(f, ", ")?; }
            write!(f, "{{ \"train\": {}, \"station\": \"{}\" }}",
                   m.train, network.name(m.station))?;
        }
        write!(f, "]")?;
    }
    if !schedule.turns.is_empty() {
        write!(f, "\n")?;
    }
    write!(f, "], \"stranded\": [")?;
    let mut first = true;
    for train in &schedule.stranded {
        if first { first = false; } else { write!(f, ", ")?; }
        write!(f, "{}", train)?;
    }
    write!(f, "] }}\n")?;
    Ok(())
}

#[test]
fn test_json_schedule() {
    use crate::input::network_parser::parse_network;
    use crate::movement::Move;

    let net = parse_network("stations:\na\nb\nconnections:\na-b\n").unwrap();
    let schedule = Schedule {
        turns: vec![vec![Move { train: 1, station: 1 }, Move { train: 2, station: 1 }]],
        stranded: vec![3],
    };
    let mut out = Vec::new();
    json_schedule(&net, &schedule, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(),
               "{ \"turns\": [\n  [{ \"train\": 1, \"station\": \"b\" }, \
                { \"train\": 2, \"station\": \"b\" }]\n], \"stranded\": [3] }\n");

    let mut out = Vec::new();
    json_schedule(&net, &Schedule::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "{ \"turns\": [], \"stranded\": [] }\n");
}
