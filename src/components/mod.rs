pub mod theme_switch;
