/// Character-by-character phrase cycling for the hero subtitle.
///
/// `Typing → Holding → Deleting → Pausing → Typing (next phrase)`, forever.
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
    Pausing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub hold: Duration,
    pub gap: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(80),
            delete_interval: Duration::from_millis(40),
            hold: Duration::from_millis(1800),
            gap: Duration::from_millis(400),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    phrase: usize,
    shown: usize,
    phase: Phase,
    /// Time accumulated toward the next step.
    pending: Duration,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S], timing: TypewriterTiming) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            timing,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            pending: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|p| p[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Advance by `elapsed` and return the visible text.
    pub fn tick(&mut self, elapsed: Duration) -> String {
        if self.phrases.is_empty() {
            return String::new();
        }
        self.pending += elapsed;
        while let Some(cost) = self.step_cost() {
            if self.pending < cost {
                break;
            }
            self.pending -= cost;
            self.advance();
        }
        self.text()
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase].len()
    }

    /// Duration the current state waits before its next transition.
    fn step_cost(&self) -> Option<Duration> {
        let cost = match self.phase {
            Phase::Typing => self.timing.type_interval,
            Phase::Holding => self.timing.hold,
            Phase::Deleting => self.timing.delete_interval,
            Phase::Pausing => self.timing.gap,
        };
        // Zero-cost steps would spin forever on an empty phrase.
        (!cost.is_zero()).then_some(cost)
    }

    fn advance(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.current_len() {
                    self.shown += 1;
                }
                if self.shown == self.current_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.phase = Phase::Typing;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            type_interval: ms(10),
            delete_interval: ms(5),
            hold: ms(100),
            gap: ms(50),
        }
    }

    #[test]
    fn types_one_character_per_interval() {
        let mut tw = Typewriter::new(&["Rust", "Web"], timing());
        assert_eq!(tw.tick(ms(0)), "");
        assert_eq!(tw.tick(ms(10)), "R");
        assert_eq!(tw.tick(ms(25)), "Rus");
        assert_eq!(tw.tick(ms(5)), "Rust");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn holds_then_deletes_then_moves_on() {
        let mut tw = Typewriter::new(&["ab", "xyz"], timing());
        tw.tick(ms(20));
        assert_eq!(tw.phase(), Phase::Holding);
        assert_eq!(tw.tick(ms(99)), "ab");
        assert_eq!(tw.tick(ms(1)), "ab");
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.tick(ms(5)), "a");
        assert_eq!(tw.tick(ms(5)), "");
        assert_eq!(tw.phase(), Phase::Pausing);
        tw.tick(ms(50));
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.tick(ms(10)), "x");
    }

    #[test]
    fn loops_back_to_first_phrase() {
        let mut tw = Typewriter::new(&["a", "b"], timing());
        // a: type 10, hold 100, delete 5, gap 50 = 165 per one-char phrase
        tw.tick(ms(165 * 2));
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.tick(ms(10)), "a");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = Typewriter::new(&["né→"], timing());
        assert_eq!(tw.tick(ms(20)), "né");
        assert_eq!(tw.tick(ms(10)), "né→");
    }

    #[test]
    fn empty_phrase_list_yields_nothing() {
        let mut tw = Typewriter::new::<&str>(&[], timing());
        assert_eq!(tw.tick(ms(1000)), "");
    }

    #[test]
    fn empty_phrase_does_not_stall() {
        let mut tw = Typewriter::new(&["", "ok"], timing());
        tw.tick(ms(10 + 100 + 5 + 50));
        assert_eq!(tw.phrase_index(), 1);
    }
}
