//! Interactive fiction session management.

use wo_core::{Room, World};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::mobile::Mobile;
use crate::narration::Narration;
use crate::parser::{
    Command, parse_command, resolve_any_item, resolve_exit, resolve_held_item, resolve_room_item,
};

const VICTORY: &str = "The engine catches with a high electric whine. You point the snowmobile \
                       at the open garage door and ride out into the white. You're going home.";

/// A single-player game session.
pub struct GameSession {
    world: World,
    mobile: Mobile,
    config: GameConfig,
    quit: bool,
}

impl GameSession {
    /// Create a new session with the player in the world's start room.
    pub fn new(world: World, config: GameConfig) -> FictionResult<Self> {
        let start = world.start()?.label.clone();
        tracing::info!(world = %world.meta.name, start = %start, "session started");
        Ok(Self {
            world,
            mobile: Mobile::new(start),
            config,
            quit: false,
        })
    }

    /// Load the configured world and start a session in it.
    pub fn from_config(config: GameConfig) -> FictionResult<Self> {
        let world = config.load_world()?;
        Self::new(world, config)
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player.
    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }

    /// Get a mutable reference to the player.
    pub fn mobile_mut(&mut self) -> &mut Mobile {
        &mut self.mobile
    }

    /// Get the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the player has escaped.
    pub fn is_won(&self) -> bool {
        self.mobile.victory
    }

    /// Whether the player asked to quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// The opening text: title, intro, and the starting room.
    pub fn intro(&self) -> FictionResult<Vec<Narration>> {
        let mut out = vec![Narration::event(self.world.meta.name.clone())];
        if !self.world.meta.intro.is_empty() {
            out.push(Narration::info(self.world.meta.intro.clone()));
        }
        out.push(self.describe_room()?);
        Ok(out)
    }

    /// Process a player command and return what happened.
    pub fn process(&mut self, input: &str) -> FictionResult<Vec<Narration>> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command, then end the turn.
    pub fn execute(&mut self, command: Command) -> FictionResult<Vec<Narration>> {
        let was_won = self.mobile.victory;

        let mut out = match command {
            Command::Move { target } => self.do_move(&target)?,
            Command::Look { target } => self.do_look(target.as_deref())?,
            Command::Take { item } => self.do_take(&item)?,
            Command::Drop { item } => self.do_drop(&item)?,
            Command::Use { item } => self.do_use(&item)?,
            Command::Inventory => vec![self.do_inventory()],
            Command::Help { topic } => vec![do_help(topic.as_deref())],
            Command::Quit => {
                self.quit = true;
                vec![Narration::info("Goodbye!")]
            }
            Command::Unknown { input } => return Err(FictionError::UnknownCommand(input)),
        };

        if self.mobile.commit() {
            out.push(self.describe_room()?);
        }
        if self.mobile.victory && !was_won {
            out.push(Narration::event(VICTORY));
        }
        Ok(out)
    }

    fn do_move(&mut self, target: &str) -> FictionResult<Vec<Narration>> {
        let room = room_of(&self.world, &self.mobile.location)?;
        let exit = resolve_exit(room, target).map(|e| e.label.clone());
        Ok(vec![self.mobile.move_through(room, exit.as_deref())])
    }

    fn do_look(&mut self, target: Option<&str>) -> FictionResult<Vec<Narration>> {
        let Some(target) = target else {
            return Ok(vec![self.describe_room()?]);
        };

        let room = room_of(&self.world, &self.mobile.location)?;
        if let Some(item) = resolve_any_item(room, &self.mobile.inventory, target) {
            let label = item.label.clone();
            let special = item.look_special;
            let mut out = vec![Narration::info(describe(&item.description))];
            if special {
                let room = room_mut_of(&mut self.world, &self.mobile.location)?;
                out.push(self.mobile.look_special(room, &label));
            }
            return Ok(out);
        }

        if let Some(exit) = resolve_exit(room, target) {
            return Ok(vec![Narration::info(describe(&exit.description))]);
        }

        Ok(vec![Narration::caution("You don't see that here.")])
    }

    fn do_take(&mut self, item: &str) -> FictionResult<Vec<Narration>> {
        let room = room_of(&self.world, &self.mobile.location)?;
        let label = resolve_room_item(room, item).map(|i| i.label.clone());

        let room = room_mut_of(&mut self.world, &self.mobile.location)?;
        Ok(vec![self.mobile.take(room, label.as_deref())])
    }

    fn do_drop(&mut self, item: &str) -> FictionResult<Vec<Narration>> {
        let label = resolve_held_item(&self.mobile.inventory, item).map(|i| i.label.clone());

        let room = room_mut_of(&mut self.world, &self.mobile.location)?;
        Ok(vec![self.mobile.drop(room, label.as_deref())])
    }

    fn do_use(&mut self, item: &str) -> FictionResult<Vec<Narration>> {
        let room = room_of(&self.world, &self.mobile.location)?;
        let label = resolve_any_item(room, &self.mobile.inventory, item).map(|i| i.label.clone());

        let room = room_mut_of(&mut self.world, &self.mobile.location)?;
        Ok(vec![self.mobile.use_item(room, label.as_deref())])
    }

    fn do_inventory(&self) -> Narration {
        if self.mobile.inventory.is_empty() {
            return Narration::info("You are carrying nothing.");
        }

        let mut output = "You are carrying:".to_string();
        for item in self.mobile.inventory.iter() {
            output.push_str(&format!("\n  - {}", item.name));
        }
        Narration::info(output)
    }

    fn describe_room(&self) -> FictionResult<Narration> {
        let room = room_of(&self.world, &self.mobile.location)?;
        let mut output = room.name.clone();

        if !room.description.is_empty() {
            output.push('\n');
            output.push_str(&room.description);
        }

        for item in room.carryable_items() {
            output.push_str(&format!("\nYou see a {} here.", item.name));
        }

        if self.config.list_exits && !room.exits.is_empty() {
            let exits: Vec<String> = room
                .exits
                .values()
                .map(|e| format!("{} ({})", e.direction, e.name))
                .collect();
            output.push_str(&format!("\nExits: {}", exits.join(", ")));
        }

        Ok(Narration::info(output))
    }
}

fn room_of<'w>(world: &'w World, label: &str) -> FictionResult<&'w Room> {
    world
        .room(label)
        .ok_or_else(|| FictionError::RoomNotFound(label.to_string()))
}

fn room_mut_of<'w>(world: &'w mut World, label: &str) -> FictionResult<&'w mut Room> {
    world
        .room_mut(label)
        .ok_or_else(|| FictionError::RoomNotFound(label.to_string()))
}

fn describe(description: &str) -> String {
    if description.is_empty() {
        "You see nothing special.".to_string()
    } else {
        description.to_string()
    }
}

fn do_help(topic: Option<&str>) -> Narration {
    let text = match topic.map(str::to_lowercase).as_deref() {
        None => "Commands\n\
                 Movement: north, south, east, west, up, down (or n, s, e, w, u, d)\n\
                 go <exit> - go through a door by name\n\
                 look [target] - examine surroundings or something specific\n\
                 take <item> - pick up an item\n\
                 drop <item> - drop an item\n\
                 use <item> - use an item (also cut, inject, unlock, fix)\n\
                 inventory (or i) - list what you're carrying\n\
                 help [topic] - show help\n\
                 quit - exit the game\n\n\
                 Type 'help <topic>' for more details."
            .to_string(),
        Some("movement" | "move" | "go") => "Movement\n\
                 Use directions: north, south, east, west, up, down\n\
                 Or abbreviations: n, s, e, w, u, d\n\
                 You can also: go <door name>\n\
                 Some doors will not open until you are ready for what is behind them."
            .to_string(),
        Some("look" | "examine") => "Looking\n\
                 look - describe the room\n\
                 look <target> - examine something specific\n\
                 Looking closely at things sometimes turns up more."
            .to_string(),
        Some("inventory" | "items") => "Inventory\n\
                 take <item> - pick up an item\n\
                 drop <item> - drop an item\n\
                 inventory (or i) - list what you're carrying"
            .to_string(),
        Some("use") => "Using\n\
                 use <item> - use something you carry or something in the room\n\
                 use <item> on <target> - the item is what matters"
            .to_string(),
        Some(other) => format!("No help available for '{other}'."),
    };
    Narration::info(text)
}
