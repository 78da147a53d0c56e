use hecs::World;

use crate::components::*;
use crate::{Config, InputState};

/// Turn held keys into intents for keyboard-driven paddles
pub fn apply_keyboard_input(world: &mut World, input: &InputState, config: &Config) {
    let intent = PaddleIntent {
        up: input.is_pressed(&config.key_up),
        down: input.is_pressed(&config.key_down),
    };

    for (_entity, (controller, paddle_intent)) in
        world.query_mut::<(&Controller, &mut PaddleIntent)>()
    {
        if *controller == Controller::Keyboard {
            *paddle_intent = intent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_keys_set_keyboard_intent_only() {
        let mut world = World::new();
        let config = Config::new();
        let human = create_paddle(&mut world, Side::Left, Controller::Keyboard, 100.0);
        let cpu = create_paddle(&mut world, Side::Right, Controller::Computer, 100.0);

        let mut input = InputState::new();
        input.key_down("w");
        apply_keyboard_input(&mut world, &input, &config);

        assert_eq!(*world.get::<&PaddleIntent>(human).unwrap(), PaddleIntent::up());
        assert!(
            world.get::<&PaddleIntent>(cpu).unwrap().is_idle(),
            "Computer paddle ignores the keyboard"
        );
    }

    #[test]
    fn test_releasing_keys_clears_intent() {
        let mut world = World::new();
        let config = Config::new();
        let human = create_paddle(&mut world, Side::Left, Controller::Keyboard, 100.0);

        let mut input = InputState::new();
        input.key_down("s");
        apply_keyboard_input(&mut world, &input, &config);
        assert_eq!(*world.get::<&PaddleIntent>(human).unwrap(), PaddleIntent::down());

        input.key_up("s");
        apply_keyboard_input(&mut world, &input, &config);
        assert!(world.get::<&PaddleIntent>(human).unwrap().is_idle());
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut world = World::new();
        let config = Config::new();
        let human = create_paddle(&mut world, Side::Left, Controller::Keyboard, 100.0);

        let mut input = InputState::new();
        input.key_down("ArrowUp");
        input.key_down("W");
        apply_keyboard_input(&mut world, &input, &config);
        assert!(world.get::<&PaddleIntent>(human).unwrap().is_idle());
    }
}
