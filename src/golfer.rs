//! Golfer state: skills, abilities, bag, gear and purse.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    equipment::{standard_bag, Club, ClubCategory, Equipment},
    lie::LieType,
    shape::ShotShape,
    units::Yard,
};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 9;
/// Contribution of one level to the target number.
pub const VALUE_PER_LEVEL: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Strength,
    Control,
    Touch,
    Mental,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 4] = [
        AbilityKind::Strength,
        AbilityKind::Control,
        AbilityKind::Touch,
        AbilityKind::Mental,
    ];
}

impl ClubCategory {
    pub const ALL: [ClubCategory; 7] = [
        ClubCategory::Driver,
        ClubCategory::Woods,
        ClubCategory::LongIrons,
        ClubCategory::MidIrons,
        ClubCategory::ShortIrons,
        ClubCategory::Wedges,
        ClubCategory::Putter,
    ];

    pub fn ability(self) -> AbilityKind {
        match self {
            ClubCategory::Driver | ClubCategory::Woods => AbilityKind::Strength,
            ClubCategory::LongIrons | ClubCategory::MidIrons => AbilityKind::Control,
            ClubCategory::ShortIrons | ClubCategory::Wedges => AbilityKind::Touch,
            ClubCategory::Putter => AbilityKind::Mental,
        }
    }
}

impl fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClubCategory::Driver => "Driver",
            ClubCategory::Woods => "Woods",
            ClubCategory::LongIrons => "Long Irons",
            ClubCategory::MidIrons => "Mid Irons",
            ClubCategory::ShortIrons => "Short Irons",
            ClubCategory::Wedges => "Wedges",
            ClubCategory::Putter => "Putter",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AbilityKind::Strength => "Strength",
            AbilityKind::Control => "Control",
            AbilityKind::Touch => "Touch",
            AbilityKind::Mental => "Mental",
        };
        f.write_str(name)
    }
}

/// Level and experience of one skill or ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    level: u8,
    experience: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            level: MIN_LEVEL,
            experience: 0,
        }
    }
}

impl Progress {
    pub fn at_level(level: u8) -> Self {
        Self {
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            experience: 0,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn value(&self) -> i32 {
        i32::from(self.level) * VALUE_PER_LEVEL
    }

    /// Zero at the level cap.
    pub fn experience_to_next_level(&self) -> u32 {
        if self.level >= MAX_LEVEL {
            return 0;
        }
        (u32::from(self.level) + 1) * 50
    }

    /// Adds experience and returns the number of levels gained.
    pub fn add_experience(&mut self, xp: u32) -> u8 {
        if self.level >= MAX_LEVEL {
            return 0;
        }
        let start = self.level;
        self.experience += xp;
        while self.level < MAX_LEVEL && self.experience >= self.experience_to_next_level() {
            self.experience -= self.experience_to_next_level();
            self.level += 1;
        }
        if self.level >= MAX_LEVEL {
            self.experience = 0;
        }
        self.level - start
    }
}

/// What a single experience award changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUps {
    pub skill: Option<ClubCategory>,
    pub ability: Option<AbilityKind>,
}

impl LevelUps {
    pub fn is_empty(&self) -> bool {
        self.skill.is_none() && self.ability.is_none()
    }

    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(skill) = self.skill {
            messages.push(format!("{skill} leveled up!"));
        }
        if let Some(ability) = self.ability {
            messages.push(format!("{ability} leveled up!"));
        }
        messages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Golfer {
    pub name: String,
    pub clubs: Vec<Club>,
    pub skills: BTreeMap<ClubCategory, Progress>,
    pub abilities: BTreeMap<AbilityKind, Progress>,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub money: u32,
}

impl Golfer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clubs: standard_bag(),
            skills: ClubCategory::ALL
                .iter()
                .map(|&category| (category, Progress::default()))
                .collect(),
            abilities: AbilityKind::ALL
                .iter()
                .map(|&ability| (ability, Progress::default()))
                .collect(),
            equipment: Equipment::default(),
            money: 0,
        }
    }

    pub fn skill(&self, category: ClubCategory) -> Progress {
        self.skills.get(&category).copied().unwrap_or_default()
    }

    pub fn ability(&self, ability: AbilityKind) -> Progress {
        self.abilities.get(&ability).copied().unwrap_or_default()
    }

    pub fn skill_for(&self, club: &Club) -> Progress {
        self.skill(club.category)
    }

    pub fn ability_for(&self, club: &Club) -> Progress {
        self.ability(club.category.ability())
    }

    pub fn set_skill_level(&mut self, category: ClubCategory, level: u8) {
        self.skills.insert(category, Progress::at_level(level));
    }

    pub fn set_ability_level(&mut self, ability: AbilityKind, level: u8) {
        self.abilities.insert(ability, Progress::at_level(level));
    }

    /// Skill + ability + lie + shoes. Not clamped: negative targets are legal.
    pub fn target_number(&self, club: &Club, lie: LieType) -> i32 {
        self.skill_for(club).value()
            + self.ability_for(club).value()
            + lie.difficulty_modifier()
            + self.equipment.lie_penalty_reduction()
    }

    /// As [`Golfer::target_number`] plus the shape modifier; putts ignore shape.
    pub fn target_number_with_shape(&self, club: &Club, lie: LieType, shape: ShotShape) -> i32 {
        let shape_modifier = if club.is_putter() {
            0
        } else {
            shape.difficulty_modifier()
        };
        self.target_number(club, lie) + shape_modifier
    }

    pub fn modified_club(&self, club: &Club) -> Club {
        self.equipment.modify(club)
    }

    /// Putter on the green, otherwise the shortest club that covers the
    /// distance, falling back to the longest club in the bag.
    pub fn best_club(&self, remaining: Yard, lie: LieType) -> Option<&Club> {
        if lie == LieType::Green {
            if let Some(putter) = self.clubs.iter().find(|club| club.is_putter()) {
                return Some(putter);
            }
        }
        let covering = self
            .clubs
            .iter()
            .filter(|club| club.distance >= remaining)
            .min_by(|a, b| a.distance.0.total_cmp(&b.distance.0));
        covering.or_else(|| {
            self.clubs
                .iter()
                .max_by(|a, b| a.distance.0.total_cmp(&b.distance.0))
        })
    }

    /// Credits `xp` to both the club's skill and its ability.
    pub fn award_experience(&mut self, club: &Club, xp: u32) -> LevelUps {
        let category = club.category;
        let ability = category.ability();
        let skill_gain = self.skills.entry(category).or_default().add_experience(xp);
        let ability_gain = self.abilities.entry(ability).or_default().add_experience(xp);
        LevelUps {
            skill: (skill_gain > 0).then_some(category),
            ability: (ability_gain > 0).then_some(ability),
        }
    }

    /// Pays out the hole reward and returns it.
    pub fn award_hole_reward(&mut self, par: u32, strokes: u32) -> u32 {
        let reward = hole_reward(par, strokes);
        self.money += reward;
        reward
    }
}

/// Prize money for a finished hole.
pub fn hole_reward(par: u32, strokes: u32) -> u32 {
    if strokes == 1 {
        return 100;
    }
    match strokes as i64 - par as i64 {
        d if d <= -2 => 50,
        -1 => 25,
        0 => 10,
        1 => 5,
        _ => 1,
    }
}
