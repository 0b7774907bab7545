//! Per-game-family result decoders.
//!
//! One module per family genre; each [`GameDecoder`] implementation owns its
//! table-identity predicate, its result parser, its structured matchers, and
//! its history projection. Family membership is declared exactly once, in
//! [`all_decoders`]; adding a table game means adding a decoder here without
//! touching the existing ones.
//!
//! Every module documents its own feed contract: table ids, win-code map,
//! card layout, rdesc grammar, side markets, and history codes.

pub mod aaa;
pub mod andar_bahar;
pub mod baccarat;
pub mod bollywood;
pub mod card32;
pub mod casino_meter;
pub mod cricket;
pub mod dragon_tiger;
pub mod dragon_tiger_lion;
pub mod dus_ka_dum;
pub mod kbc;
pub mod lottery;
pub mod lucky7;
pub mod note_number;
pub mod poker;
pub mod queen;
pub mod race20;
pub mod roulette;
pub mod sicbo;
pub mod teen20;
pub mod teen_joker;
pub mod teen_muflis;
pub mod teen_oneday;
pub mod teen_open;
pub mod teen_test;
pub mod three_card_judgement;
pub mod trio;
pub mod war;
pub mod worli;


use crate::cards::{rank_from_token, Card};
use crate::decoder::GameDecoder;
use crate::label::strip_prefix_word;

/// Judge a "<subject> <condition>" label against one card, where the
/// condition is a color, parity, suit, or "card <rank>" sub-condition. With
/// an empty subject the label is the bare condition ("red", "card 7").
/// `None` when the label is not of this shape.
pub(crate) fn match_card_subject(label: &str, subject: &str, card: Card) -> Option<bool> {
    let condition = if subject.is_empty() {
        label
    } else {
        strip_prefix_word(label, subject)?
    };
    match condition {
        "red" | "black" => Some(card.color().name() == condition),
        "odd" => Some(card.is_odd()),
        "even" => Some(!card.is_odd()),
        "heart" | "diamond" | "spade" | "club" => Some(card.suit.name() == condition),
        _ => {
            let token = strip_prefix_word(condition, "card")?;
            let rank = rank_from_token(token)?;
            Some(card.rank == rank)
        }
    }
}

/// Judge a bare "card <rank>" label against one card. `None` when the label
/// is not of this shape or the rank token is malformed.
pub(crate) fn match_card_rank(label: &str, card: Card) -> Option<bool> {
    let token = strip_prefix_word(label, "card")?;
    let rank = rank_from_token(token)?;
    Some(card.rank == rank)
}

/// The full standard decoder population, in registry declaration order.
pub fn all_decoders() -> &'static [&'static dyn GameDecoder] {
    &DECODERS
}

static DECODERS: [&dyn GameDecoder; 40] = [
    // Teen patti
    &teen20::Teen20,
    &teen_oneday::TeenOneDay,
    &teen_test::TeenTest,
    &teen_open::TeenOpen,
    &teen_muflis::TeenMuflis,
    &teen_joker::TeenJoker,
    // Dragon tiger
    &dragon_tiger::Dt20,
    &dragon_tiger::Dt202,
    &dragon_tiger::Dt6,
    &dragon_tiger_lion::Dtl20,
    // Andar bahar
    &andar_bahar::Ab20,
    &andar_bahar::Abj,
    // Single-card draws
    &lucky7::Lucky7,
    &lucky7::Lucky7Eu,
    &aaa::AmarAkbarAnthony,
    &dus_ka_dum::DusKaDum,
    &kbc::Kbc,
    &lottery::Lottery,
    &note_number::NoteNumber,
    &trio::Trio,
    // Baccarat
    &baccarat::Baccarat,
    &baccarat::Baccarat2,
    // 32 cards
    &card32::Card32,
    &card32::Card32Eu,
    // Other card tables
    &war::CasinoWar,
    &three_card_judgement::ThreeCardJudgement,
    &queen::CasinoQueen,
    &bollywood::BollywoodCasino,
    &race20::Race20,
    &casino_meter::CasinoMeter,
    // Poker
    &poker::Poker20,
    &poker::PokerOneDay,
    &poker::PokerSix,
    // Dice and wheel
    &sicbo::SicBo,
    &roulette::Roulette,
    // Cricket-themed
    &cricket::SuperOver,
    &cricket::CricketMatch20,
    &cricket::FiveFiveCricket,
    // Matka
    &worli::Worli,
    &worli::InstantWorli,
];
