#![forbid(unsafe_code)]

/// Bundled sample roster: `(first_name, last_name, sgpa)`.
pub const SAMPLE_STUDENTS: &[(&str, &str, f64)] = &[
    ("Aarav", "Sharma", 8.5),
    ("Vivaan", "Patel", 7.8),
    ("Aditya", "Verma", 9.1),
    ("Vihaan", "Rao", 8.2),
    ("Arjun", "Gupta", 7.4),
    ("Sai", "Kulkarni", 8.9),
    ("Reyansh", "Mehta", 6.9),
    ("Krishna", "Joshi", 9.3),
    ("Ishaan", "Deshmukh", 8.0),
    ("Shaurya", "Naik", 7.6),
    ("Ayaan", "Reddy", 8.4),
    ("Atharva", "Nair", 7.7),
    ("Kabir", "Iyer", 9.0),
    ("Rudra", "Chavan", 8.1),
    ("Yash", "Pillai", 7.5),
    ("Dhruv", "Mishra", 8.8),
    ("Aryan", "Khan", 6.8),
    ("Kunal", "Bose", 8.6),
    ("Manav", "Singh", 7.9),
    ("Harsh", "Thakur", 8.3),
    ("Neel", "Dubey", 9.2),
    ("Om", "Sawant", 7.2),
    ("Rohan", "Jadhav", 8.7),
    ("Tanish", "Kapoor", 8.0),
    ("Dev", "Malhotra", 7.3),
    ("Parth", "Chaudhary", 8.9),
    ("Siddharth", "Goyal", 9.4),
    ("Aniket", "Bansal", 7.1),
    ("Pranav", "Saxena", 8.2),
    ("Laksh", "Agarwal", 7.8),
    ("Varun", "Trivedi", 8.5),
    ("Nikhil", "Bhatt", 9.0),
    ("Shivam", "Yadav", 6.7),
    ("Akash", "Pandey", 8.6),
    ("Rahul", "Tiwari", 7.4),
    ("Kartik", "Solanki", 8.8),
    ("Ansh", "Tomar", 9.1),
    ("Mohit", "Rawat", 7.9),
    ("Uday", "Shetty", 8.3),
    ("Tejas", "Borkar", 8.7),
];
