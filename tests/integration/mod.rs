mod manifest_generation;
