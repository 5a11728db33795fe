use scanflags::FlagSet;

fn main() {
    let mut flags = FlagSet::new();
    let test = flags.create("test", "usage msg", true, false);
    let test2 = flags.create("test2", "The greeting.", "Test2", false);
    let count = flags.create("count", "How many times to greet.", 1u32, false);
    flags.parse(false);

    let greeting = test2.and_then(|h| h.get::<String>()).unwrap_or_default();
    for _ in 0..count.and_then(|h| h.get::<u32>()).unwrap_or(1) {
        println!("{greeting}");
    }

    if let Some(test) = test.and_then(|h| h.value()) {
        println!("test: {test}");
    }
}
