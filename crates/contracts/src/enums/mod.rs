pub mod icon_key;
