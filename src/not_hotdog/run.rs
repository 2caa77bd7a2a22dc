use crate::not_hotdog::core::{init, transition, Effect};
use crate::not_hotdog::main::NotHotdog;
use std::io;

impl NotHotdog {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (initial_model, initial_effects) = init();
        *self.model.lock().unwrap() = initial_model.clone();
        self.render(&initial_model)?;
        self.spawn_effects(initial_effects);

        let mut current_model = initial_model;

        loop {
            let event = self
                .event_receiver
                .lock()
                .unwrap()
                .recv()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            let _ = self.logger.info(&format!("event: {:?}", event));

            let (new_model, effects) = transition(&self.config, current_model, event);

            let _ = self
                .logger
                .info(&format!("model: {:?}\neffects: {:?}", new_model, effects));

            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            self.render(&current_model)?;

            self.spawn_effects(effects);
        }
    }

    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }
}
