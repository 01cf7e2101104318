//! The stock theme file.
//!
//! Every color in here is the rendered form of the default options: the
//! default primaries, their palettes and the default backgrounds. Rendering
//! swaps those literals for the user's values.

pub const MARKER: &str = "    dark:\n";

pub const THEME: &str = r##"frosted_glass:
  card-mod-theme: frosted_glass
  modes:
    light:
      rgb-primary-color: "106, 116, 211"
      rgb-accent-color: "106, 116, 211"
      primary-color: "#6A74D3"
      accent-color: "#6A74D3"
      light-primary-color: "#B0B6E8"
      dark-primary-color: "#2F399D"
      primary-05: "#060714"
      primary-10: "#0C0E27"
      primary-20: "#171D4F"
      primary-30: "#232B76"
      primary-40: "#2F399D"
      primary-50: "#6A74D3"
      primary-60: "#626CD0"
      primary-70: "#8991DC"
      primary-80: "#B0B6E8"
      primary-90: "#D8DAF3"
      primary-95: "#EFF0FA"
      primary-text-color: "#0C0E27"
      secondary-text-color: "#232B76"
      disabled-text-color: "#8991DC"
      text-primary-color: "#EFF0FA"
      primary-background-color: "#EFF0FA"
      secondary-background-color: "#D8DAF3"
      divider-color: "rgba(var(--rgb-primary-color), 0.12)"
      sidebar-background-color: "rgba(255, 255, 255, 0.4)"
      sidebar-icon-color: "#232B76"
      sidebar-selected-icon-color: "#6A74D3"
      app-header-background-color: "rgba(255, 255, 255, 0.35)"
      app-header-text-color: "#0C0E27"
      ha-card-background: "rgba(255, 255, 255, 0.35)"
      ha-card-border-radius: "18px"
      ha-card-border-width: "1px"
      ha-card-border-color: "rgba(255, 255, 255, 0.5)"
      ha-card-box-shadow: "0 8px 32px 0 rgba(var(--rgb-primary-color), 0.15)"
      card-background-color: "rgba(255, 255, 255, 0.35)"
      switch-checked-color: "#6A74D3"
      switch-checked-track-color: "#B0B6E8"
      state-icon-color: "#2F399D"
      state-icon-active-color: "#6A74D3"
      lovelace-background: 'center / cover no-repeat fixed url("/local/frosted_glass/light.jpg")'
      card-mod-card: |
        ha-card {
          backdrop-filter: blur(12px) saturate(140%);
          -webkit-backdrop-filter: blur(12px) saturate(140%);
        }
    dark:
      rgb-primary-color: "138, 148, 232"
      rgb-accent-color: "138, 148, 232"
      primary-color: "#8A94E8"
      accent-color: "#8A94E8"
      light-primary-color: "#AAB1EE"
      dark-primary-color: "#2230AA"
      primary-05: "#040615"
      primary-10: "#080C2B"
      primary-20: "#111855"
      primary-30: "#192480"
      primary-40: "#2230AA"
      primary-50: "#8A94E8"
      primary-60: "#5563DD"
      primary-70: "#7F8AE6"
      primary-80: "#AAB1EE"
      primary-90: "#D4D8F7"
      primary-95: "#EEEFFC"
      primary-text-color: "#EEEFFC"
      secondary-text-color: "#AAB1EE"
      disabled-text-color: "#5563DD"
      text-primary-color: "#040615"
      primary-background-color: "#040615"
      secondary-background-color: "#080C2B"
      divider-color: "rgba(var(--rgb-primary-color), 0.18)"
      sidebar-background-color: "rgba(0, 0, 0, 0.35)"
      sidebar-icon-color: "#AAB1EE"
      sidebar-selected-icon-color: "#8A94E8"
      app-header-background-color: "rgba(0, 0, 0, 0.3)"
      app-header-text-color: "#EEEFFC"
      ha-card-background: "rgba(0, 0, 0, 0.3)"
      ha-card-border-radius: "18px"
      ha-card-border-width: "1px"
      ha-card-border-color: "rgba(255, 255, 255, 0.12)"
      ha-card-box-shadow: "0 8px 32px 0 rgba(0, 0, 0, 0.37)"
      card-background-color: "rgba(0, 0, 0, 0.3)"
      switch-checked-color: "#8A94E8"
      switch-checked-track-color: "#2230AA"
      state-icon-color: "#AAB1EE"
      state-icon-active-color: "#8A94E8"
      lovelace-background: 'center / cover no-repeat fixed url("/local/frosted_glass/dark.jpg")'
      card-mod-card: |
        ha-card {
          backdrop-filter: blur(12px) saturate(140%);
          -webkit-backdrop-filter: blur(12px) saturate(140%);
        }
"##;
