mod actor_bootstrap;
mod common;
mod likes_flow;
