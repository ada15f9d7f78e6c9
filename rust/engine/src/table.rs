use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::config::{ConfigError, TableConfig};
use crate::deck::Deck;
use crate::decision::{DecisionOutcome, DecisionRequest, DecisionSource};
use crate::errors::GameError;
use crate::game::{GameState, Phase, PlayerView};
use crate::hand::{evaluate, EvaluatedHand};
use crate::logger::{ActionRecord, HandRecord, ShowdownInfo};
use crate::player::{PlayerAction, PlayerState};
use crate::pot::{PotAward, PotManager};
use crate::rules::{legal_actions, validate_action, LegalActions, ValidatedAction};

/// How the table settled a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_number: u64,
    /// `false` when everyone but one player folded
    pub showed_down: bool,
    /// Per pot, main pot first
    pub awards: Vec<PotAward>,
    /// Chips received per seat
    pub payouts: Vec<u32>,
    /// Showdown hands per seat; `None` for folded seats or uncontested hands
    pub hands: Vec<Option<EvaluatedHand>>,
    /// Seats that won at least one pot, ascending
    pub winners: Vec<usize>,
    pub board: Vec<Card>,
}

impl HandResult {
    /// Best hand among the main-pot winners, if cards were shown.
    pub fn winning_hand(&self) -> Option<&EvaluatedHand> {
        let seat = *self.awards.first()?.winners.first()?;
        self.hands.get(seat)?.as_ref()
    }
}

/// What [`Table::submit`] did with a decision outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied(PlayerAction),
    AutoFolded,
}

/// A Texas Hold'em table running one hand at a time.
///
/// The table owns its deck and all player state. It pauses at exactly one point per
/// turn: [`Table::pending_decision`] describes who must act, and the answer comes back
/// through [`Table::submit`] (or [`Table::apply_action`]). [`Table::play_hand`] wires
/// the two together for synchronous decision sources.
///
/// # Examples
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::game::Phase;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::table::Table;
///
/// let mut table = Table::new(TableConfig { seed: Some(7), ..TableConfig::default() }).unwrap();
/// table.start_hand().unwrap();
/// assert_eq!(table.phase(), Phase::PreFlop);
///
/// // Heads-up: the button posts the small blind and acts first pre-flop
/// let seat = table.to_act().unwrap();
/// table.apply_action(seat, PlayerAction::Fold).unwrap();
/// assert!(table.is_hand_over());
/// ```
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    players: Vec<PlayerState>,
    board: Vec<Card>,
    phase: Phase,
    /// Chips swept from finished betting rounds
    pot: u32,
    current_bet: u32,
    min_raise: u32,
    button: usize,
    to_act: Option<usize>,
    needs_action: Vec<bool>,
    hand_number: u64,
    in_progress: bool,
    /// Rejected actions for the pending decision
    attempts: u16,
    history: Vec<ActionRecord>,
    result: Option<HandResult>,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        let stacks = vec![config.starting_stack; config.seats];
        Self::with_stacks(config, &stacks)
    }

    /// Seats one player per entry of `stacks`; `config.seats` is overridden.
    pub fn with_stacks(mut config: TableConfig, stacks: &[u32]) -> Result<Self, ConfigError> {
        config.seats = stacks.len();
        config.validate()?;
        if stacks.iter().try_fold(0u32, |sum, &s| sum.checked_add(s)).is_none() {
            return Err(ConfigError::Invalid("stacks overflow the chip count".into()));
        }
        let players = stacks
            .iter()
            .enumerate()
            .map(|(seat, &stack)| PlayerState::new(seat, stack))
            .collect();
        Ok(Self {
            deck: Deck::new(config.seed),
            min_raise: config.min_raise_increment(),
            needs_action: vec![false; stacks.len()],
            config,
            players,
            board: Vec::with_capacity(5),
            phase: Phase::PreFlop,
            pot: 0,
            current_bet: 0,
            button: 0,
            to_act: None,
            hand_number: 0,
            in_progress: false,
            attempts: 0,
            history: Vec::new(),
            result: None,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn to_act(&self) -> Option<usize> {
        self.to_act
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn deck_seed(&self) -> u64 {
        self.deck.seed()
    }

    pub fn is_hand_over(&self) -> bool {
        !self.in_progress && self.result.is_some()
    }

    /// Stacks plus outstanding bets plus the pot. Constant during a hand.
    pub fn total_chips(&self) -> u32 {
        self.pot
            + self
                .players
                .iter()
                .map(|p| p.stack() + p.bet_this_round())
                .sum::<u32>()
    }

    /// Starts the next hand: moves the button, shuffles, posts blinds and deals hole cards.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandInProgress`] if the previous hand has not finished
    /// - [`GameError::NotEnoughPlayers`] if fewer than two seats have chips
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        let funded: Vec<usize> = (0..self.players.len())
            .filter(|&s| self.players[s].stack() > 0)
            .collect();
        if funded.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                funded: funded.len(),
            });
        }

        if self.hand_number > 0 || self.players[self.button].stack() == 0 {
            self.button = self.next_funded(self.button);
        }
        self.hand_number += 1;
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.board.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.min_raise = self.config.min_raise_increment();
        self.to_act = None;
        self.needs_action.iter_mut().for_each(|n| *n = false);
        self.history.clear();
        self.result = None;
        self.attempts = 0;
        self.phase = Phase::PreFlop;
        self.in_progress = true;
        self.deck.shuffle(None);

        let (sb, bb) = if funded.len() == 2 {
            (self.button, self.next_funded(self.button))
        } else {
            let sb = self.next_funded(self.button);
            (sb, self.next_funded(sb))
        };
        self.post_blind(sb, self.config.small_blind)?;
        self.post_blind(bb, self.config.big_blind)?;
        self.current_bet = self.config.big_blind;

        // one card at a time, starting left of the button
        let order: Vec<usize> = (1..=self.players.len())
            .map(|i| (self.button + i) % self.players.len())
            .filter(|&s| self.players[s].in_hand())
            .collect();
        let first = self.deck.deal_many(order.len())?;
        let second = self.deck.deal_many(order.len())?;
        for (i, &seat) in order.iter().enumerate() {
            self.players[seat].give_cards([first[i], second[i]])?;
        }

        info!(
            hand = self.hand_number,
            button = self.button,
            small_blind = sb,
            big_blind = bb,
            players = order.len(),
            "hand started"
        );
        self.open_round(bb);
        self.progress()
    }

    fn post_blind(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        let posted = amount.min(player.stack());
        player.commit(posted)?;
        debug!(seat, posted, "blind posted");
        Ok(())
    }

    /// The legal actions for `seat` right now, whether or not it is their turn.
    pub fn legal_actions(&self, seat: usize) -> Option<LegalActions> {
        let p = self.players.get(seat)?;
        if !self.in_progress || !p.can_act() {
            return None;
        }
        Some(legal_actions(
            seat,
            p.stack(),
            p.bet_this_round(),
            self.current_bet,
            self.min_raise,
        ))
    }

    /// The decision the table is waiting for, if any.
    pub fn pending_decision(&self) -> Option<DecisionRequest> {
        let seat = self.to_act?;
        Some(DecisionRequest {
            seat,
            state: self.state_for(Some(seat)),
            legal: self.legal_actions(seat)?,
            attempt: self.attempts,
        })
    }

    /// Applies one action for the seat to act.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoHandInProgress`] / [`GameError::HandAlreadyComplete`]
    /// - [`GameError::NotPlayersTurn`] when `seat` is not the seat to act
    /// - [`GameError::IllegalAction`] when the action is outside the legal set;
    ///   the table state is left untouched
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let expected = self.expect_turn(seat)?;
        let legal = self
            .legal_actions(expected)
            .ok_or(GameError::NoHandInProgress)?;
        let validated = validate_action(&legal, action)?;
        self.execute(seat, action, validated, false)
    }

    /// Feeds a decision outcome back into the table.
    ///
    /// An illegal action is rejected with [`GameError::IllegalAction`] and the same
    /// decision stays pending, up to `max_illegal_attempts` times; after that, or on a
    /// cancelled or failed decision, the seat is folded.
    pub fn submit(
        &mut self,
        seat: usize,
        outcome: DecisionOutcome,
    ) -> Result<Resolution, GameError> {
        match outcome {
            DecisionOutcome::Act(action) => match self.apply_action(seat, action) {
                Ok(()) => Ok(Resolution::Applied(action)),
                Err(e @ GameError::IllegalAction { .. }) => {
                    self.attempts += 1;
                    if self.attempts > u16::from(self.config.max_illegal_attempts) {
                        warn!(seat, error = %e, "repeated illegal action, folding");
                        self.auto_fold(seat)
                    } else {
                        warn!(seat, error = %e, attempt = self.attempts, "illegal action rejected");
                        Err(e)
                    }
                }
                Err(e) => Err(e),
            },
            DecisionOutcome::Cancelled => {
                warn!(seat, "decision cancelled, folding");
                self.auto_fold(seat)
            }
            DecisionOutcome::Failed(reason) => {
                warn!(seat, %reason, "decision failed, folding");
                self.auto_fold(seat)
            }
        }
    }

    /// Plays one complete hand, asking `sources[seat]` for every decision.
    pub fn play_hand(
        &mut self,
        sources: &mut [Box<dyn DecisionSource>],
    ) -> Result<HandResult, GameError> {
        if let Some(seat) = (0..self.players.len()).find(|&s| s >= sources.len()) {
            return Err(GameError::MissingDecisionSource { seat });
        }
        self.start_hand()?;
        while let Some(req) = self.pending_decision() {
            let outcome = sources[req.seat].decide(&req.state, &req.legal);
            match self.submit(req.seat, outcome) {
                Ok(_) | Err(GameError::IllegalAction { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        self.result.clone().ok_or(GameError::NoHandInProgress)
    }

    fn expect_turn(&self, seat: usize) -> Result<usize, GameError> {
        if !self.in_progress {
            return Err(if self.result.is_some() {
                GameError::HandAlreadyComplete
            } else {
                GameError::NoHandInProgress
            });
        }
        let expected = self.to_act.ok_or(GameError::NoHandInProgress)?;
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        Ok(expected)
    }

    fn auto_fold(&mut self, seat: usize) -> Result<Resolution, GameError> {
        self.expect_turn(seat)?;
        self.execute(seat, PlayerAction::Fold, ValidatedAction::Fold, true)?;
        Ok(Resolution::AutoFolded)
    }

    fn execute(
        &mut self,
        seat: usize,
        action: PlayerAction,
        validated: ValidatedAction,
        auto: bool,
    ) -> Result<(), GameError> {
        let previous_bet = self.current_bet;
        match validated {
            ValidatedAction::Fold => self.players[seat].fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => {
                self.players[seat].commit(n)?
            }
            ValidatedAction::Raise { added, .. } => self.players[seat].commit(added)?,
        }

        let total = self.players[seat].bet_this_round();
        if total > previous_bet {
            let increment = total - previous_bet;
            // a short all-in raises the bet without changing the raise size
            if increment >= self.min_raise {
                self.min_raise = increment;
            }
            self.current_bet = total;
            for (s, p) in self.players.iter().enumerate() {
                self.needs_action[s] = s != seat && p.can_act();
            }
        }
        self.needs_action[seat] = false;
        self.attempts = 0;

        debug!(
            seat,
            phase = ?self.phase,
            ?action,
            chips = validated.chips_added(),
            stack = self.players[seat].stack(),
            current_bet = self.current_bet,
            auto,
            "action applied"
        );
        self.history.push(ActionRecord {
            seat,
            phase: self.phase,
            action,
            auto,
        });
        self.to_act = self.next_needing_action(seat);
        self.progress()
    }

    /// Marks who must act this round and picks the first of them after `after`.
    fn open_round(&mut self, after: usize) {
        for (s, p) in self.players.iter().enumerate() {
            self.needs_action[s] = p.can_act();
        }
        let actors: Vec<usize> = (0..self.players.len())
            .filter(|&s| self.needs_action[s])
            .collect();
        // a lone player who has matched the bet has nobody to bet against
        if let [only] = actors[..] {
            if self.players[only].bet_this_round() >= self.current_bet {
                self.needs_action[only] = false;
            }
        }
        self.to_act = self.next_needing_action(after);
    }

    /// Runs the hand forward until a decision is needed or the hand is settled.
    fn progress(&mut self) -> Result<(), GameError> {
        loop {
            if self.players.iter().filter(|p| p.in_hand()).count() <= 1 {
                return self.settle(false);
            }
            if self.to_act.is_some() {
                return Ok(());
            }
            self.end_round();
            if self.phase == Phase::River {
                self.phase = Phase::Showdown;
                return self.settle(true);
            }
            self.phase = self.phase.next();
            self.deck.burn();
            let cards = self.deck.deal_many(self.phase.cards_dealt())?;
            self.board.extend(cards);
            debug!(phase = ?self.phase, board = ?self.board, "community cards dealt");
            self.open_round(self.button);
        }
    }

    fn end_round(&mut self) {
        for p in &mut self.players {
            self.pot += p.sweep_bet();
        }
        self.current_bet = 0;
        self.min_raise = self.config.min_raise_increment();
    }

    fn settle(&mut self, showdown: bool) -> Result<(), GameError> {
        self.end_round();
        self.to_act = None;

        let mut hands: Vec<Option<EvaluatedHand>> = vec![None; self.players.len()];
        if showdown {
            for (seat, p) in self.players.iter().enumerate() {
                if let (true, Some(hole)) = (p.in_hand(), p.hole_cards()) {
                    let mut cards = hole.to_vec();
                    cards.extend_from_slice(&self.board);
                    hands[seat] = Some(evaluate(&cards)?);
                }
            }
        }

        let contributions: Vec<u32> = self.players.iter().map(|p| p.committed()).collect();
        let folded: Vec<bool> = self.players.iter().map(|p| p.is_folded()).collect();
        let awards = PotManager::build(&contributions, &folded).award(&hands, self.button);

        let mut payouts = vec![0u32; self.players.len()];
        for &(seat, chips) in awards.iter().flat_map(|a| a.shares.iter()) {
            payouts[seat] += chips;
        }
        for (p, &chips) in self.players.iter_mut().zip(&payouts) {
            p.add_chips(chips);
        }
        self.pot = 0;

        let mut winners: Vec<usize> = awards
            .iter()
            .flat_map(|a| a.winners.iter().copied())
            .collect();
        winners.sort_unstable();
        winners.dedup();

        info!(
            hand = self.hand_number,
            showdown,
            ?winners,
            ?payouts,
            "hand settled"
        );
        self.result = Some(HandResult {
            hand_number: self.hand_number,
            showed_down: showdown,
            awards,
            payouts,
            hands,
            winners,
            board: self.board.clone(),
        });
        self.in_progress = false;
        Ok(())
    }

    fn next_seat(&self, from: usize, pred: impl Fn(usize) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..=n).map(|i| (from + i) % n).find(|&s| pred(s))
    }

    fn next_funded(&self, from: usize) -> usize {
        self.next_seat(from, |s| self.players[s].stack() > 0)
            .unwrap_or(from)
    }

    fn next_needing_action(&self, from: usize) -> Option<usize> {
        self.next_seat(from, |s| self.needs_action[s])
    }

    /// Observer snapshot with every hole card hidden.
    pub fn state(&self) -> GameState {
        self.state_for(None)
    }

    /// Snapshot as `viewer` may see it: only their own hole cards are visible.
    pub fn state_for(&self, viewer: Option<usize>) -> GameState {
        let contributions: Vec<u32> = self.players.iter().map(|p| p.committed()).collect();
        let folded: Vec<bool> = self.players.iter().map(|p| p.is_folded()).collect();
        GameState {
            hand_number: self.hand_number,
            phase: self.phase,
            community_cards: self.board.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            min_raise: self.min_raise,
            button: self.button,
            to_act: self.to_act,
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    seat: p.seat(),
                    stack: p.stack(),
                    bet_this_round: p.bet_this_round(),
                    committed: p.committed(),
                    folded: p.is_folded(),
                    all_in: p.is_all_in(),
                    hole_cards: if viewer == Some(p.seat()) {
                        p.hole_cards()
                    } else {
                        None
                    },
                })
                .collect(),
            pots: PotManager::build(&contributions, &folded).into_pots(),
            hand_over: self.is_hand_over(),
        }
    }

    /// History entry for the last finished hand.
    pub fn hand_record(&self, hand_id: String) -> Option<HandRecord> {
        let result = self.result.as_ref()?;
        let showdown = result.showed_down.then(|| ShowdownInfo {
            winners: result.winners.clone(),
            notes: result.winning_hand().map(|h| h.describe()),
        });
        Some(HandRecord {
            hand_id,
            seed: Some(self.deck_seed()),
            button: self.button,
            actions: self.history.clone(),
            board: result.board.clone(),
            payouts: result.payouts.clone(),
            ts: None,
            meta: None,
            showdown,
        })
    }
}
