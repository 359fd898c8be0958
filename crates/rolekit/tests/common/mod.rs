#![allow(dead_code)] // each integration test uses a subset of the demo types

use rolekit::prelude::*;

///
/// Transform
///

#[derive(Attribute, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

///
/// Category
///

#[derive(Attribute, Clone, Debug, Default, Eq, PartialEq)]
pub struct Category {
    pub name: String,
}

///
/// Logger
///
/// Dependency-free role. Prefers the host's `Category` when one is present,
/// falling back to its own context otherwise.
///

#[derive(Role)]
pub struct Logger {
    context: String,
}

impl Logger {
    pub fn new(context: &str) -> Self {
        Self {
            context: context.to_string(),
        }
    }

    pub fn log<H: Host>(&self, host: &H, message: &str) -> String {
        let context = host
            .try_attribute::<Category>()
            .map_or(self.context.as_str(), |category| category.name.as_str());

        format!("[{context}] {message}")
    }
}

///
/// Mover
///

#[derive(Default, Role)]
#[role(requires(Transform))]
pub struct Mover;

impl Mover {
    pub fn move_x<A: Slot<Transform>>(&mut self, attributes: &mut A, dx: f32) {
        attributes.get_mut::<Transform>().x += dx;
    }
}

rolekit::host! {
    pub struct Player {
        roles: { logger: Logger, mover: Mover },
        attributes: { transform: Transform, category: Category },
    }
}

impl Player {
    pub fn named(name: &str) -> Result<Self, CompositionError> {
        let mut player = Self::compose(
            Logger::new(name),
            Mover::default(),
            Transform {
                x: 100.0,
                ..Transform::default()
            },
            Category::default(),
        )?;
        player.attribute_mut::<Category>().name = name.to_string();

        Ok(player)
    }

    pub fn update(&mut self) -> String {
        let (roles, attributes) = self.composition_mut().parts_mut();
        roles.get_mut::<Mover>().move_x(attributes, 5.0);

        self.role::<Logger>().log(self, "update finished")
    }
}
