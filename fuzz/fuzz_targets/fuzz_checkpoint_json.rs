#![no_main]

use bbl::domain::ports::CheckpointRepository;
use bbl::infrastructure::JsonCheckpointRepository;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let repository = JsonCheckpointRepository::new(dir.path());
    if std::fs::write(repository.path(), data).is_err() {
        return;
    }

    // Whatever loads must save and load back unchanged
    if let Ok(checkpoint) = repository.load() {
        repository.save(&checkpoint).unwrap();
        assert_eq!(repository.load().unwrap(), checkpoint);
    }
});
