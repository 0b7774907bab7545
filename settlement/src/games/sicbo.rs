//! Sic Bo.
//!
//! Dice rounds; some studios roll two dice, the flagship rolls three.
//!
//! Table ids: `sicbo`. Aliases: "supersicbo".
//!
//! Win codes: the declared dice total, which must equal the computed sum.
//!
//! Cards: none. rdesc segment 0 carries the dice as comma-separated pips
//! ("3,3" or "4,2,6"); two or three dice, each 1-6.
//!
//! Markets:
//! - "Odd"/"Even" on the total.
//! - "Any Pair" (at least two matching dice), "Any Triple" (three dice
//!   only), "Small" (4-10) and "Big" (11-17) on three dice; a triple kills
//!   both Small and Big.
//! - Compound: "Total N"/"Sum Total N" backs the exact total,
//!   "Greater Than N"/"Less Than N" compare against it, "Single N" needs
//!   one die showing N, "Double N" two, "Triple N" all three.
//!
//! History codes: the total, as digits.

use crate::decoder::GameDecoder;
use crate::label::{split_rdesc, trailing_number};
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct SicBo;

const TOTALS: [&str; 17] = [
    "total 2", "total 3", "total 4", "total 5", "total 6", "total 7", "total 8", "total 9",
    "total 10", "total 11", "total 12", "total 13", "total 14", "total 15", "total 16", "total 17",
    "total 18",
];

fn parse_dice(round: &RawRound) -> Option<Vec<u8>> {
    let segments = split_rdesc(round.rdesc_str());
    let dice: Vec<u8> = segments
        .first()?
        .split(',')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;
    if !(2..=3).contains(&dice.len()) || dice.iter().any(|&d| !(1..=6).contains(&d)) {
        return None;
    }
    Some(dice)
}

fn count_showing(outcome: &Outcome, pip: i64) -> Option<usize> {
    if !(1..=6).contains(&pip) {
        return None;
    }
    Some(
        outcome
            .rolled_dice()
            .iter()
            .filter(|&&d| d as i64 == pip)
            .count(),
    )
}

impl GameDecoder for SicBo {
    fn family(&self) -> &'static str {
        "sicbo"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("sicbo", "Sic Bo", FamilyCategory::Dice)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["sicbo"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["supersicbo"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let dice = parse_dice(round)?;
        let total: i64 = dice.iter().map(|&d| d as i64).sum();
        let declared: i64 = round.win.trim().parse().ok()?;
        if declared != total {
            return None;
        }

        let mut outcome = Outcome::new(&format!("total {total}"))
            .attr(&format!("sum total {total}"))
            .attr(if total % 2 == 1 { "odd" } else { "even" })
            .total(total);

        let any_pair = (1..=6).any(|pip| dice.iter().filter(|&&d| d == pip).count() >= 2);
        if any_pair {
            outcome = outcome.attr("any pair");
        }
        if dice.len() == 3 {
            let triple = dice[0] == dice[1] && dice[1] == dice[2];
            if triple {
                outcome = outcome.attr("any triple");
            } else if (4..=10).contains(&total) {
                outcome = outcome.attr("small");
            } else if (11..=17).contains(&total) {
                outcome = outcome.attr("big");
            }
        }
        Some(outcome.dice(dice).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &TOTALS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["small", "big", "odd", "even", "any pair", "any triple"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let total = outcome.declared_total()?;
        let (head, number) = trailing_number(label)?;
        match head {
            "total" | "sum total" => Some(number == total),
            "greater than" => Some(total > number),
            "less than" => Some(total < number),
            "single" => Some(count_showing(outcome, number)? >= 1),
            "double" => Some(count_showing(outcome, number)? >= 2),
            "triple" => Some(count_showing(outcome, number)? >= 3),
            _ => None,
        }
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<i64>() {
            Ok(total) if (2..=18).contains(&total) => total.to_string(),
            _ => "-".to_string(),
        }
    }
}
