use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            ui: GameDisplay::new(),
            input_source,
            renderer,
        })
    }

    pub fn run(&mut self) {
        loop {
            if let Some(ending) = self.engine.check_game_over() {
                self.ui.render_game_state(
                    self.engine.board(),
                    self.engine.board().current_player(),
                    self.engine.last_move(),
                    None,
                );
                match ending {
                    GameEnding::Win(mark) => println!("{} wins!", mark),
                    GameEnding::Draw => println!("Draw!"),
                }
                break;
            }

            let current_turn = self.engine.board().current_player();
            self.renderer
                .render(&mut self.ui, &self.engine, current_turn, self.engine.last_move());

            match self.input_source.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(_) => {
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }
    }
}
