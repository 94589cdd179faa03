mod simple_launch;

pub(crate) use simple_launch::SimpleLaunchProgram;
