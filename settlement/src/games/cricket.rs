//! Cricket-themed card tables.
//!
//! Card cricket rounds: `superover` (Super Over), `cmatch20` (Cricket Match
//! 20-20), and `cricketv3` (Five Five Cricket). The run cards these tables
//! deal are not standard rank-suit tokens, so the card field is ignored;
//! everything settles from the win code and the description.
//!
//! Win codes: `1` = Team A, `2` = Team B, `0` = Tie.
//!
//! rdesc: segment 0 is the winner with its run total in a parenthesized
//! suffix ("Team A(126)").
//!
//! Markets: `cmatch20` runs "Odd"/"Even" on the winning run total;
//! `cricketv3` adds compound "Runs N" backing the exact total. The super
//! over itself carries the two team backs only.
//!
//! History codes: the winning run total when reported, else `A`/`B`/`X`.

use crate::decoder::GameDecoder;
use crate::label::{parenthesized_total, split_rdesc, trailing_number};
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

fn decode(round: &RawRound, parity_markets: bool) -> Option<Outcome> {
    let winner = match round.win.trim() {
        "1" => "team a",
        "2" => "team b",
        "0" => "tie",
        _ => return None,
    };
    let mut outcome = Outcome::new(winner).mid(round.mid.clone());
    let runs = split_rdesc(round.rdesc_str())
        .first()
        .and_then(|s| parenthesized_total(s));
    if let Some(runs) = runs {
        outcome = outcome.total(runs);
        if parity_markets {
            outcome = outcome.attr(if runs % 2 == 1 { "odd" } else { "even" });
        }
    }
    Some(outcome)
}

fn history_code(round: &RawRound) -> String {
    if let Some(runs) = split_rdesc(round.rdesc_str())
        .first()
        .and_then(|s| parenthesized_total(s))
    {
        return runs.to_string();
    }
    match round.win.trim() {
        "1" => "A",
        "2" => "B",
        "0" => "X",
        _ => "-",
    }
    .to_string()
}

const OUTCOMES: [&str; 3] = ["team a", "team b", "tie"];

/// Super Over: team backs only.
pub struct SuperOver;

impl GameDecoder for SuperOver {
    fn family(&self) -> &'static str {
        "superover"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("superover", "Super Over", FamilyCategory::Cricket)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["superover"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, false)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

/// Cricket Match 20-20, with run-parity markets.
pub struct CricketMatch20;

impl GameDecoder for CricketMatch20 {
    fn family(&self) -> &'static str {
        "cmatch20"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("cmatch20", "Cricket Match 20-20", FamilyCategory::Cricket)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["cmatch20"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

/// Five Five Cricket: parity plus exact-runs markets.
pub struct FiveFiveCricket;

impl GameDecoder for FiveFiveCricket {
    fn family(&self) -> &'static str {
        "cricketv3"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("cricketv3", "Five Five Cricket", FamilyCategory::Cricket)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["cricketv3"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["fivefivecricket"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let (head, number) = trailing_number(label)?;
        if head != "runs" {
            return None;
        }
        Some(Some(number) == outcome.declared_total())
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}
