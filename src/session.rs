use crate::catalog::Catalog;
use crate::countdown::{Clock, SystemClock, TickKey};
use crate::error::{QuizError, Result};
use crate::models::{
    Advance, AnswerRecord, Category, Countdown, Lifecycle, Question, QuizResult, QuizSession,
    TickOutcome, OPTION_COUNT,
};
use crate::scoring;

impl QuizSession<SystemClock> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_clock(catalog, SystemClock)
    }
}

impl<C: Clock> QuizSession<C> {
    pub fn with_clock(catalog: Catalog, clock: C) -> Self {
        Self {
            catalog,
            category: None,
            answers: Vec::new(),
            current_index: 0,
            lifecycle: Lifecycle::NotStarted,
            countdown: Countdown::default(),
            time_up: false,
            question_started_at: None,
            started_at: None,
            result: None,
            attempt: 0,
            clock,
        }
    }

    /// Pick the category for the next attempt. Any attempt in progress is
    /// abandoned; the attempt itself is not started.
    pub fn select_category(&mut self, category_id: &str) -> Result<&Category> {
        let category = self
            .catalog
            .find(category_id)
            .cloned()
            .ok_or_else(|| QuizError::UnknownCategory(category_id.to_string()))?;

        tracing::info!(
            category = %category.id,
            questions = category.questions.len(),
            time_per_question = category.time_per_question,
            passing_score = category.passing_score,
            "category selected"
        );
        self.clear_attempt();
        Ok(self.category.insert(category))
    }

    pub fn start_attempt(&mut self) -> Result<()> {
        let limit = self
            .category
            .as_ref()
            .ok_or(QuizError::NoCategorySelected)?
            .time_per_question;

        self.clear_attempt();
        self.attempt += 1;
        self.lifecycle = Lifecycle::Started;
        self.countdown = Countdown {
            remaining: limit,
            active: true,
        };
        self.question_started_at = Some(self.clock.now());
        self.started_at = Some(chrono::Local::now());

        tracing::info!(
            attempt = self.attempt,
            category = %self.category_id().unwrap_or_default(),
            "attempt started"
        );
        Ok(())
    }

    /// Record an answer for the current question. Stops the countdown in
    /// the same step, so a tick arriving afterwards cannot time it out.
    pub fn select_answer(&mut self, option: usize) -> Result<&AnswerRecord> {
        self.ensure_in_progress()?;
        if option >= OPTION_COUNT {
            return Err(QuizError::InvalidOption(option));
        }
        let (question_id, is_correct, limit) = {
            let category = self.category.as_ref().ok_or(QuizError::NoCategorySelected)?;
            let question = &category.questions[self.current_index];
            (
                question.id,
                scoring::is_correct(question, option),
                category.time_per_question,
            )
        };

        let record = AnswerRecord {
            question_id,
            selected_option: Some(option),
            is_correct,
            time_taken_secs: self.elapsed_secs().min(limit),
        };
        tracing::debug!(
            question = question_id,
            option,
            correct = is_correct,
            time_taken = record.time_taken_secs,
            "answer recorded"
        );
        self.countdown.active = false;

        let slot = match self.answers.iter().position(|a| a.question_id == question_id) {
            Some(existing) => {
                self.answers[existing] = record;
                existing
            }
            None => {
                self.answers.push(record);
                self.answers.len() - 1
            }
        };
        Ok(&self.answers[slot])
    }

    /// Move past the current question, recording it as unanswered if the
    /// player never picked an option. On the last question the index stays
    /// put; submitting is the only way forward from there.
    pub fn advance_to_next(&mut self) -> Result<Advance> {
        self.ensure_in_progress()?;
        let (question_id, limit, count) = {
            let category = self.category.as_ref().ok_or(QuizError::NoCategorySelected)?;
            (
                category.questions[self.current_index].id,
                category.time_per_question,
                category.questions.len(),
            )
        };

        if !self.answers.iter().any(|a| a.question_id == question_id) {
            tracing::debug!(question = question_id, "recording unanswered question");
            self.answers.push(AnswerRecord::unanswered(question_id, limit));
        }

        if self.current_index + 1 >= count {
            return Ok(Advance::AtLastQuestion);
        }

        self.current_index += 1;
        self.countdown = Countdown {
            remaining: limit,
            active: true,
        };
        self.time_up = false;
        self.question_started_at = Some(self.clock.now());
        tracing::debug!(index = self.current_index, "advanced to next question");
        Ok(Advance::Moved(self.current_index))
    }

    /// Finalize the attempt and score it. Calling it again on a completed
    /// attempt recomputes the same result.
    pub fn submit(&mut self) -> Result<&QuizResult> {
        if self.lifecycle == Lifecycle::NotStarted {
            return Err(QuizError::NotStarted);
        }
        let category = self.category.as_ref().ok_or(QuizError::NoCategorySelected)?;

        let result = scoring::compute_result(category, &self.answers);
        self.answers = result.answers.clone();
        self.lifecycle = Lifecycle::Completed;
        self.countdown.active = false;

        tracing::info!(
            attempt = self.attempt,
            category = %category.id,
            correct = result.correct,
            incorrect = result.incorrect,
            unanswered = result.unanswered,
            percentage = result.percentage,
            passed = result.passed,
            "attempt submitted"
        );
        Ok(self.result.insert(result))
    }

    /// Back to the unstarted state. The selected category is kept.
    pub fn reset_attempt(&mut self) {
        if self.lifecycle != Lifecycle::NotStarted {
            tracing::info!(attempt = self.attempt, "attempt reset");
        }
        self.clear_attempt();
        self.attempt += 1;
    }

    /// One second of the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.countdown.active {
            return TickOutcome::Idle;
        }
        self.countdown.remaining = self.countdown.remaining.saturating_sub(1);
        if self.countdown.remaining > 0 {
            return TickOutcome::Running(self.countdown.remaining);
        }

        self.countdown.active = false;
        self.time_up = true;
        tracing::warn!(index = self.current_index, "time up");
        TickOutcome::TimeUp
    }

    fn ensure_in_progress(&self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::NotStarted => Err(QuizError::NotStarted),
            Lifecycle::Completed => Err(QuizError::AlreadyCompleted),
            Lifecycle::Started => Ok(()),
        }
    }

    fn clear_attempt(&mut self) {
        self.answers.clear();
        self.current_index = 0;
        self.lifecycle = Lifecycle::NotStarted;
        self.countdown = Countdown::default();
        self.time_up = false;
        self.question_started_at = None;
        self.started_at = None;
        self.result = None;
    }

    fn elapsed_secs(&self) -> u32 {
        let Some(started) = self.question_started_at else {
            return 0;
        };
        let elapsed = self.clock.now().saturating_duration_since(started);
        elapsed.as_secs_f64().round() as u32
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn category_id(&self) -> Option<String> {
        self.category.as_ref().map(|c| c.id.clone())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_started(&self) -> bool {
        self.lifecycle == Lifecycle::Started
    }

    pub fn is_completed(&self) -> bool {
        self.lifecycle == Lifecycle::Completed
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.category.as_ref().map_or(0, |c| c.questions.len())
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.category
            .as_ref()
            .and_then(|c| c.questions.get(self.current_index))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.question_count()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn record_for(&self, question_id: u32) -> Option<&AnswerRecord> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn current_record(&self) -> Option<&AnswerRecord> {
        self.current_question().and_then(|q| self.record_for(q.id))
    }

    /// A record exists for the current question, so the view should stop
    /// accepting selections.
    pub fn has_answered(&self) -> bool {
        self.current_record().is_some()
    }

    pub fn is_time_up(&self) -> bool {
        self.time_up
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Questions without a selected option, the count shown before submit.
    pub fn unanswered_count(&self) -> usize {
        let chosen = self
            .answers
            .iter()
            .filter(|a| a.selected_option.is_some())
            .count();
        self.question_count().saturating_sub(chosen)
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn tick_key(&self) -> TickKey {
        (self.attempt, self.current_index)
    }

    pub fn started_at(&self) -> Option<chrono::DateTime<chrono::Local>> {
        self.started_at
    }
}
