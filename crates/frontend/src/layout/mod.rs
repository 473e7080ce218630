mod shell;

pub use shell::Shell;
