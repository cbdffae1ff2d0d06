mod cli;
mod recital;
