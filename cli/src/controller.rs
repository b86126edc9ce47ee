use samegame_core::{
    BoardSnapshot, ClickOutcome, Coord2, FeedbackSink, GameConfig, GameError, PlayEngine,
    RandomGridGenerator, ScoreHistory,
};

use crate::input::Command;
use crate::view::{GameView, ViewKind};

/// Whether the interactive loop keeps reading input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Forwards commands to the engine and keeps every attached view in sync with it.
pub struct Controller<H, F> {
    engine: PlayEngine,
    config: GameConfig,
    views: Vec<Box<dyn GameView>>,
    history: H,
    feedback: F,
    score_recorded: bool,
}

impl<H, F> Controller<H, F>
where
    H: ScoreHistory,
    H::Error: std::fmt::Display,
    F: FeedbackSink,
{
    pub fn new(config: GameConfig, seed: u64, history: H, feedback: F) -> Result<Self, GameError> {
        let engine = Self::deal(config, seed)?;
        Ok(Self {
            engine,
            config,
            views: Vec::new(),
            history,
            feedback,
            score_recorded: false,
        })
    }

    fn deal(config: GameConfig, seed: u64) -> Result<PlayEngine, GameError> {
        log::info!(
            "New {}x{} game with {} colors, seed: {}",
            config.size.0,
            config.size.1,
            config.difficulty.colors(),
            seed
        );
        PlayEngine::generate(config, RandomGridGenerator::new(seed))
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Attaches `view` and draws the current board on it right away.
    pub fn register_view(&mut self, mut view: Box<dyn GameView>) {
        let snapshot = BoardSnapshot::from_engine(&self.engine);
        if let Err(err) = view.update(&snapshot) {
            log::warn!("Could not draw {:?} view: {}", view.kind(), err);
        }
        self.views.push(view);
    }

    /// Detaches every view of `kind`, returns whether any was attached.
    pub fn deregister_view(&mut self, kind: ViewKind) -> bool {
        let before = self.views.len();
        self.views.retain(|view| view.kind() != kind);
        before != self.views.len()
    }

    pub fn has_view(&self, kind: ViewKind) -> bool {
        self.views.iter().any(|view| view.kind() == kind)
    }

    pub fn update_views(&mut self) {
        let snapshot = BoardSnapshot::from_engine(&self.engine);
        for view in &mut self.views {
            if let Err(err) = view.update(&snapshot) {
                log::warn!("Could not draw {:?} view: {}", view.kind(), err);
            }
        }
    }

    pub fn show_highscores(&mut self) {
        let scores = self.history.scores();
        for view in &mut self.views {
            if let Err(err) = view.show_highscores(&scores) {
                log::warn!("Could not show scores on {:?} view: {}", view.kind(), err);
            }
        }
    }

    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome, GameError> {
        let outcome = self.engine.process_click(coords, &mut self.feedback)?;
        log::debug!("Click at {:?}: {:?}", coords, outcome);

        if outcome.has_update() {
            self.update_views();
        }
        if self.engine.is_game_over() {
            self.record_score();
        }
        Ok(outcome)
    }

    /// Plays the advised move, `None` when there is nothing left to advise.
    pub fn hint(&mut self) -> Result<Option<ClickOutcome>, GameError> {
        match self.engine.next_best_move() {
            Some(coords) => self.click(coords).map(Some),
            None => Ok(None),
        }
    }

    pub fn new_game(&mut self, seed: Option<u64>) -> Result<(), GameError> {
        let seed = seed.unwrap_or_else(rand::random);
        self.engine = Self::deal(self.config, seed)?;
        self.score_recorded = false;
        self.update_views();
        if self.engine.is_game_over() {
            self.record_score();
        }
        Ok(())
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow, GameError> {
        match command {
            Command::Click(coords) => {
                self.click(coords)?;
            }
            Command::Hint => {
                if self.hint()?.is_none() {
                    log::info!("No move left to play");
                }
            }
            Command::AttachConsole => {
                if !self.has_view(ViewKind::Console) {
                    self.register_view(Box::new(crate::view::ConsoleView::new(std::io::stdout())));
                }
            }
            Command::DetachConsole => {
                if !self.deregister_view(ViewKind::Console) {
                    log::info!("No console view attached");
                }
            }
            Command::ShowScores => self.show_highscores(),
            Command::NewGame(seed) => self.new_game(seed)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn record_score(&mut self) {
        if self.score_recorded {
            return;
        }
        self.score_recorded = true;

        let points = self.engine.points();
        log::info!("Game over, final score: {}", points);
        if let Err(err) = self.history.append(points) {
            log::error!("Could not save score {}: {}", points, err);
        }
        self.show_highscores();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samegame_core::{Difficulty, FeedbackEvent, MemoryScoreHistory};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        updates: Vec<BoardSnapshot>,
        highscores: Vec<Vec<u64>>,
    }

    struct RecordingView {
        kind: ViewKind,
        recorded: Rc<RefCell<Recorded>>,
    }

    impl GameView for RecordingView {
        fn kind(&self) -> ViewKind {
            self.kind
        }

        fn update(&mut self, snapshot: &BoardSnapshot) -> io::Result<()> {
            self.recorded.borrow_mut().updates.push(snapshot.clone());
            Ok(())
        }

        fn show_highscores(&mut self, scores: &[u64]) -> io::Result<()> {
            self.recorded.borrow_mut().highscores.push(scores.to_vec());
            Ok(())
        }
    }

    type TestController = Controller<MemoryScoreHistory, Vec<FeedbackEvent>>;

    fn controller(seed: u64) -> (TestController, Rc<RefCell<Recorded>>) {
        let config = GameConfig::new((5, 5), Difficulty::Easy);
        let mut controller =
            Controller::new(config, seed, MemoryScoreHistory::new(), Vec::new()).unwrap();
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        controller.register_view(Box::new(RecordingView {
            kind: ViewKind::Board,
            recorded: Rc::clone(&recorded),
        }));
        (controller, recorded)
    }

    fn play_out(controller: &mut TestController) {
        while controller.hint().unwrap().is_some() {}
    }

    #[test]
    fn registering_draws_immediately() {
        let (controller, recorded) = controller(7);
        let recorded = recorded.borrow();
        assert_eq!(recorded.updates.len(), 1);
        assert_eq!(recorded.updates[0].points, controller.engine().points());
    }

    #[test]
    fn hint_plays_the_advised_move() {
        let (mut controller, recorded) = controller(11);
        let best = controller.engine().next_best_move().unwrap();
        let group = samegame_core::connected_group(controller.engine().grid(), best).len();

        let outcome = controller.hint().unwrap().unwrap();

        assert_eq!(outcome.removal().map(|r| usize::from(r.group_size)), Some(group));
        assert_eq!(recorded.borrow().updates.len(), 2);
    }

    #[test]
    fn final_score_is_recorded_once() {
        let (mut controller, recorded) = controller(408);
        play_out(&mut controller);
        let points = controller.engine().points();

        // clicks after the end must not record again
        for row in 0..5 {
            for col in 0..5 {
                controller.click((row, col)).unwrap();
            }
        }

        assert_eq!(controller.history().scores(), [points]);
        assert_eq!(recorded.borrow().highscores, [vec![points]]);
    }

    #[test]
    fn new_game_resets_recording() {
        let (mut controller, _recorded) = controller(3);
        play_out(&mut controller);
        controller.new_game(Some(4)).unwrap();
        assert!(!controller.engine().is_game_over());
        play_out(&mut controller);

        assert_eq!(controller.history().scores().len(), 2);
    }

    #[test]
    fn seeded_new_game_is_reproducible() {
        let (mut first, _) = controller(1);
        let (mut second, _) = controller(2);
        first.new_game(Some(99)).unwrap();
        second.new_game(Some(99)).unwrap();

        assert_eq!(first.engine(), second.engine());
    }

    #[test]
    fn views_can_be_detached_by_kind() {
        let (mut controller, recorded) = controller(5);
        controller.register_view(Box::new(RecordingView {
            kind: ViewKind::Console,
            recorded: Rc::clone(&recorded),
        }));
        assert!(controller.has_view(ViewKind::Console));

        assert!(controller.deregister_view(ViewKind::Console));
        assert!(!controller.deregister_view(ViewKind::Console));
        assert!(controller.has_view(ViewKind::Board));

        controller.update_views();
        // one initial draw per view, then one update for the board view
        assert_eq!(recorded.borrow().updates.len(), 3);
    }

    #[test]
    fn invalid_clicks_are_reported() {
        let (mut controller, _) = controller(6);
        assert_eq!(controller.click((5, 0)), Err(GameError::InvalidCoords));
        assert_eq!(
            controller.handle(Command::Click((0, 9))),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut controller, _) = controller(8);
        assert_eq!(controller.handle(Command::Quit), Ok(Flow::Quit));
        assert_eq!(controller.handle(Command::ShowScores), Ok(Flow::Continue));
    }
}
