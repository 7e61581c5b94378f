pub mod droplets;
