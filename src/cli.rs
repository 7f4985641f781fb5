/// Picks the queue name from process arguments: the first positional argument
/// after the program name. Anything past it is ignored.
pub fn queue_arg<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().skip(1).next()
}

/// Prints the usage line for `program` and exits with status 1.
pub fn usage_error(program: &str) -> ! {
    println!("Usage: {} <queue_name>", program);
    std::process::exit(1);
}
