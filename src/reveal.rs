/// Timing of a staggered word-by-word fade in, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSchedule {
    pub duration: f64,
    pub stagger: f64,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            duration: 2.0,
            stagger: 0.2,
        }
    }
}

impl RevealSchedule {
    pub fn delay(&self, index: usize) -> f64 {
        index as f64 * self.stagger
    }

    /// Time after triggering at which word `index` is fully opaque.
    pub fn finish(&self, index: usize) -> f64 {
        self.delay(index) + self.duration
    }

    /// Time after triggering at which all `count` words are fully opaque.
    pub fn total(&self, count: usize) -> f64 {
        match count {
            0 => 0.0,
            n => self.finish(n - 1),
        }
    }

    /// Inline CSS transition for word `index`.
    pub fn transition_style(&self, index: usize) -> String {
        format!(
            "transition-property: opacity; transition-duration: {}s; transition-delay: {}s;",
            self.duration,
            round_ms(self.delay(index))
        )
    }
}

// 0.2 * 3 is 0.6000000000000001
fn round_ms(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("Hi, I'm Mark"), vec!["Hi,", "I'm", "Mark"]);
        assert_eq!(split_words("  Check   out my blog! "), vec!["Check", "out", "my", "blog!"]);
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_schedule_for_greeting() {
        let schedule = RevealSchedule::default();
        let words = split_words("Hi, I'm Mark");
        let delays = (0..words.len()).map(|i| schedule.delay(i)).collect::<Vec<_>>();
        assert_eq!(delays[0], 0.0);
        assert!((delays[1] - 0.2).abs() < 1e-9);
        assert!((delays[2] - 0.4).abs() < 1e-9);
        assert!((schedule.total(words.len()) - (2.0 + 2.0 * 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_words_finish_in_order() {
        let schedule = RevealSchedule::default();
        for i in 1..10 {
            assert!(schedule.finish(i) > schedule.finish(i - 1));
            assert!(schedule.finish(i) <= schedule.total(10));
        }
        assert_eq!(schedule.total(0), 0.0);
    }

    #[test]
    fn test_transition_style() {
        let schedule = RevealSchedule::default();
        assert_eq!(
            schedule.transition_style(3),
            "transition-property: opacity; transition-duration: 2s; transition-delay: 0.6s;"
        );
        assert_eq!(
            schedule.transition_style(0),
            "transition-property: opacity; transition-duration: 2s; transition-delay: 0s;"
        );
    }
}
