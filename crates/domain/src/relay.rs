//! One master relay gating four switchable loads.
//!
//! The master relay is the only thing that can cut every load at once: while
//! it is off, all loads are forced off and refuse to be switched on.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the four sub-relays behind the master relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Load {
    One,
    Two,
    Three,
    Four,
}

impl Load {
    /// Every load, in panel order.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Human-facing number, 1 to 4.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    fn slot(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl std::str::FromStr for Load {
    type Err = ValidationError;

    /// Parse a load number as it appears in a URL path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| ValidationError::UnknownLoad(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl TryFrom<u8> for Load {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(ValidationError::UnknownLoad(other.to_string())),
        }
    }
}

impl From<Load> for u8 {
    fn from(load: Load) -> Self {
        load.number()
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "load {}", self.number())
    }
}

/// Render a relay flag the way the readings table shows it.
#[must_use]
pub fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

/// State of the master relay and its four loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RelayPanelRepr")]
pub struct RelayPanel {
    main: bool,
    loads: [bool; 4],
}

impl RelayPanel {
    /// Whether the master relay is on.
    #[must_use]
    pub fn main(&self) -> bool {
        self.main
    }

    /// Whether the given load is switched on.
    #[must_use]
    pub fn load(&self, load: Load) -> bool {
        self.loads[load.slot()]
    }

    /// All four load flags, in panel order.
    #[must_use]
    pub fn loads(&self) -> [bool; 4] {
        self.loads
    }

    /// Loads can only be operated while the master relay is on.
    #[must_use]
    pub fn loads_enabled(&self) -> bool {
        self.main
    }

    /// Switch the master relay.
    ///
    /// Turning it off forces every load off. Turning it on re-enables the
    /// loads but leaves them off.
    pub fn set_main(&mut self, on: bool) {
        self.main = on;
        if !on {
            self.loads = [false; 4];
        }
    }

    /// Switch a single load.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LoadDisabled`] while the master relay is off.
    pub fn set_load(&mut self, load: Load, on: bool) -> Result<(), ValidationError> {
        if !self.loads_enabled() {
            return Err(ValidationError::LoadDisabled(load));
        }
        self.loads[load.slot()] = on;
        Ok(())
    }
}

/// Wire shape of [`RelayPanel`]; normalised so a panel decoded with the
/// master off never carries a load that is on.
#[derive(Deserialize)]
struct RelayPanelRepr {
    main: bool,
    loads: [bool; 4],
}

impl From<RelayPanelRepr> for RelayPanel {
    fn from(repr: RelayPanelRepr) -> Self {
        let mut panel = Self {
            main: true,
            loads: repr.loads,
        };
        panel.set_main(repr.main);
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_on() -> RelayPanel {
        let mut panel = RelayPanel::default();
        panel.set_main(true);
        for load in Load::ALL {
            panel.set_load(load, true).unwrap();
        }
        panel
    }

    #[test]
    fn should_start_with_everything_off_and_loads_disabled() {
        let panel = RelayPanel::default();
        assert!(!panel.main());
        assert_eq!(panel.loads(), [false; 4]);
        assert!(!panel.loads_enabled());
    }

    #[test]
    fn should_uncheck_and_disable_every_load_when_main_turns_off() {
        let mut panel = all_on();

        panel.set_main(false);

        assert_eq!(panel.loads(), [false; 4]);
        assert!(!panel.loads_enabled());
        for load in Load::ALL {
            assert!(panel.set_load(load, true).is_err());
        }
    }

    #[test]
    fn should_enable_loads_without_checking_them_when_main_turns_on() {
        let mut panel = RelayPanel::default();

        panel.set_main(true);

        assert_eq!(panel.loads(), [false; 4]);
        assert!(panel.loads_enabled());
    }

    #[test]
    fn should_keep_loads_when_main_is_switched_on_again() {
        let mut panel = all_on();
        panel.set_main(true);
        assert_eq!(panel.loads(), [true; 4]);
    }

    #[test]
    fn should_reject_load_change_while_main_is_off() {
        let mut panel = RelayPanel::default();
        let result = panel.set_load(Load::Two, true);
        assert_eq!(result, Err(ValidationError::LoadDisabled(Load::Two)));
        assert!(!panel.load(Load::Two));
    }

    #[test]
    fn should_switch_single_load_when_main_is_on() {
        let mut panel = RelayPanel::default();
        panel.set_main(true);

        panel.set_load(Load::Three, true).unwrap();

        assert_eq!(panel.loads(), [false, false, true, false]);
    }

    #[test]
    fn should_parse_load_numbers_one_to_four() {
        assert_eq!(Load::try_from(1), Ok(Load::One));
        assert_eq!(Load::try_from(4), Ok(Load::Four));
        assert_eq!(
            Load::try_from(0),
            Err(ValidationError::UnknownLoad("0".to_string()))
        );
        assert_eq!(
            Load::try_from(5),
            Err(ValidationError::UnknownLoad("5".to_string()))
        );
    }

    #[test]
    fn should_parse_load_from_path_segment() {
        assert_eq!("3".parse::<Load>(), Ok(Load::Three));
        assert_eq!(
            "300".parse::<Load>(),
            Err(ValidationError::UnknownLoad("300".to_string()))
        );
        assert_eq!(
            "abc".parse::<Load>(),
            Err(ValidationError::UnknownLoad("abc".to_string()))
        );
    }

    #[test]
    fn should_serialize_load_as_its_number() {
        assert_eq!(serde_json::to_string(&Load::Two).unwrap(), "2");
        assert!(serde_json::from_str::<Load>("9").is_err());
    }

    #[test]
    fn should_serialize_panel_as_main_and_loads() {
        let mut panel = RelayPanel::default();
        panel.set_main(true);
        panel.set_load(Load::One, true).unwrap();

        let json = serde_json::to_value(panel).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"main": true, "loads": [true, false, false, false]})
        );
    }

    #[test]
    fn should_force_loads_off_when_decoding_panel_with_main_off() {
        let panel: RelayPanel =
            serde_json::from_str(r#"{"main": false, "loads": [true, true, false, true]}"#)
                .unwrap();
        assert_eq!(panel.loads(), [false; 4]);
    }

    #[test]
    fn should_render_on_off() {
        assert_eq!(on_off(true), "ON");
        assert_eq!(on_off(false), "OFF");
    }
}
