use crate::core::colour_mapping::gradient::ColourGradient;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::{
    aqua::AquaGradient, dark_red::DarkRedGradient, viridis::ViridisGradient,
};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind) -> Box<dyn ColourGradient> {
    match kind {
        ColourMapKind::Aqua => Box::new(AquaGradient),
        ColourMapKind::DarkRed => Box::new(DarkRedGradient),
        ColourMapKind::Viridis => Box::new(ViridisGradient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKind::ALL {
            assert_eq!(colour_map_factory(kind).kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKind::ALL {
            assert_eq!(colour_map_factory(kind).display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
