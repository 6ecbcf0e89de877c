mod workspace;

pub use workspace::TestWorkspace;
