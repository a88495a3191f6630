mod deprecation;
mod display;
mod pipeline;
mod testkit;
