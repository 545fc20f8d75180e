pub mod uplink;
