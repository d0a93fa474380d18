//! Built-in content: characters and the per-tier round tables.
//!
//! Easy maps to the basic tables, Hard to the advanced ones. Every table for a
//! 10-round mode has exactly 10 entries; the tap tables have 5.

use crate::domain::{Ability, AbilityKind, Character, GlitchRound, QuestOption, QuestRound, Question, TapRound};

pub static CHARACTERS: [Character; 3] = [
  Character {
    id: "sine",
    name: "SINE",
    description: "The Wave Rider. Smooth logic, fluid code.",
    avatar: "~",
    ability: Ability {
      name: "TIME DILATION",
      description: "Adds 5 seconds to the current timer.",
      kind: AbilityKind::Time,
    },
  },
  Character {
    id: "cosine",
    name: "COSINE",
    description: "The Phase Shifter. Always ahead of the curve.",
    avatar: "*",
    ability: Ability {
      name: "ERROR ERASE",
      description: "Removes one incorrect answer option.",
      kind: AbilityKind::Erase,
    },
  },
  Character {
    id: "tangent",
    name: "TANGENT",
    description: "The Limit Breaker. Unpredictable but powerful.",
    avatar: "^",
    ability: Ability {
      name: "SCORE MULTIPLIER",
      description: "2x multiplier on the next correct answer.",
      kind: AbilityKind::Multiplier,
    },
  },
];

macro_rules! q {
  ($id:expr, $text:expr, [$($opt:expr),+ $(,)?], $answer:expr, $diff:expr) => {
    Question { id: $id, text: $text, options: &[$($opt),+], answer: $answer, difficulty: $diff }
  };
}

pub static BASIC_QUESTIONS: [Question; 10] = [
  q!(1, "Which data type is used to store a single character in C++?", ["char", "string", "int", "bool"], "char", 1),
  q!(2, "What is the modulus operator in C++?", ["/", "*", "%", "&"], "%", 1),
  q!(3, "Which of these is a valid variable name?", ["1variable", "_varName", "var-name", "float"], "_varName", 2),
  q!(4, "What is the output of: for(int i=0; i<3; i++) cout << i;", ["012", "0123", "123", "333"], "012", 2),
  q!(5, "How do you declare a constant in C++?", ["const int x = 5;", "int const x = 5;", "Both are correct", "define x 5"], "Both are correct", 3),
  q!(6, "What is the index of the last element in an array of size N?", ["N", "N+1", "N-1", "0"], "N-1", 3),
  q!(7, "Which function is used to find the length of a string?", ["length()", "size()", "Both A and B", "count()"], "Both A and B", 4),
  q!(8, "What does \"cin >> x;\" do?", ["Prints x", "Reads input into x", "Clears x", "Exits program"], "Reads input into x", 4),
  q!(9, "Which sorting algorithm has the best average case complexity?", ["Bubble Sort", "Selection Sort", "Quick Sort", "Insertion Sort"], "Quick Sort", 5),
  q!(10, "What is the time complexity of Binary Search?", ["O(n)", "O(n^2)", "O(log n)", "O(1)"], "O(log n)", 5),
];

pub static ADVANCED_QUESTIONS: [Question; 10] = [
  q!(1, "What is the output of: int x=5; int *p=&x; *p=10; cout << x;", ["5", "10", "Address of x", "Error"], "10", 3),
  q!(2, "Which keyword is used to handle exceptions in C++?", ["catch", "throw", "try", "All of these"], "All of these", 3),
  q!(3, "What does the \"virtual\" keyword do in a base class function?", ["Makes it private", "Enables polymorphism", "Prevents inheritance", "Speeds up execution"], "Enables polymorphism", 4),
  q!(4, "Which STL container stores unique elements in sorted order?", ["vector", "list", "set", "stack"], "set", 4),
  q!(5, "What is the purpose of a \"template\" in C++?", ["To create generic code", "To define UI", "To speed up build", "To manage memory"], "To create generic code", 4),
  q!(6, "Which smart pointer is used for exclusive ownership?", ["shared_ptr", "weak_ptr", "unique_ptr", "auto_ptr"], "unique_ptr", 5),
  q!(7, "What is the result of (5 << 1)?", ["5", "10", "2.5", "25"], "10", 5),
  q!(8, "How do you capture all variables by value in a lambda?", ["[&]", "[=]", "[val]", "[]"], "[=]", 5),
  q!(9, "What is a \"dangling pointer\"?", ["Pointer to null", "Pointer to deleted memory", "Uninitialized pointer", "Pointer to a pointer"], "Pointer to deleted memory", 5),
  q!(10, "What is the \"Rule of Three\" in C++?", ["3 types of loops", "3 access specifiers", "Destructor, Copy Constructor, Copy Assignment", "Int, Float, Char"], "Destructor, Copy Constructor, Copy Assignment", 5),
];

pub static BASIC_TAP_ROUNDS: [TapRound; 5] = [
  TapRound { id: 1, category: "Programming Keywords", examples: &["if", "else", "while", "return", "void"] },
  TapRound { id: 2, category: "Loop Types", examples: &["for", "while", "do-while", "range-based for"] },
  TapRound { id: 3, category: "Data Types", examples: &["int", "float", "double", "char", "bool", "string"] },
  TapRound { id: 4, category: "Searching Concepts", examples: &["Linear Search", "Binary Search", "Key", "Index", "Midpoint"] },
  TapRound { id: 5, category: "Sorting Terms", examples: &["Bubble", "Selection", "Insertion", "Merge", "Quick", "Swap"] },
];

pub static ADVANCED_TAP_ROUNDS: [TapRound; 5] = [
  TapRound { id: 1, category: "File Operations", examples: &["open", "close", "read", "write", "append", "ifstream", "ofstream"] },
  TapRound { id: 2, category: "Errors/Bugs", examples: &["Syntax", "Runtime", "Logical", "Segmentation Fault", "Memory Leak"] },
  TapRound { id: 3, category: "Functions Terminology", examples: &["Parameter", "Argument", "Return Type", "Prototype", "Definition", "Call"] },
  TapRound { id: 4, category: "Array Operations", examples: &["Initialization", "Traversal", "Insertion", "Deletion", "Access"] },
  TapRound { id: 5, category: "Algorithm Vocabulary", examples: &["Complexity", "Efficiency", "Pseudocode", "Flowchart", "Iteration"] },
];

pub static BASIC_GLITCH_ROUNDS: [GlitchRound; 10] = [
  GlitchRound {
    id: 1,
    corrupted_code: "int x = \"hello\";",
    error: "Type Mismatch",
    cause: "Assigning string to int",
    fix: "string x = \"hello\";",
    hint: "Check the data type of the variable x.",
    explanation: "In C++, you cannot assign a string literal to an integer variable.",
    difficulty: 1,
  },
  GlitchRound {
    id: 2,
    corrupted_code: "if (x = 5) { ... }",
    error: "Logical Error",
    cause: "Using assignment instead of equality",
    fix: "if (x == 5)",
    hint: "Are you comparing values or assigning them?",
    explanation: "The single = is for assignment; double == is for comparison.",
    difficulty: 1,
  },
  GlitchRound {
    id: 3,
    corrupted_code: "cout << \"Hello World\"",
    error: "Syntax Error",
    cause: "Missing semicolon",
    fix: "cout << \"Hello World\";",
    hint: "Every statement in C++ must end with a specific character.",
    explanation: "Semicolons are required at the end of statements in C++.",
    difficulty: 2,
  },
  GlitchRound {
    id: 4,
    corrupted_code: "int arr[5]; arr[5] = 10;",
    error: "Runtime Error",
    cause: "Array index out of bounds",
    fix: "arr[4] = 10;",
    hint: "Arrays in C++ start at index 0.",
    explanation: "An array of size 5 has indices 0, 1, 2, 3, and 4.",
    difficulty: 2,
  },
  GlitchRound {
    id: 5,
    corrupted_code: "while(i < 10) { cout << i; }",
    error: "Infinite Loop",
    cause: "Variable i is never incremented",
    fix: "i++; inside the loop",
    hint: "How will the loop condition ever become false?",
    explanation: "Without updating the loop variable, the condition remains true forever.",
    difficulty: 3,
  },
  GlitchRound {
    id: 6,
    corrupted_code: "int sum(int a, b) { return a + b; }",
    error: "Syntax Error",
    cause: "Missing type for parameter b",
    fix: "int sum(int a, int b)",
    hint: "Every parameter in a function needs its own type declaration.",
    explanation: "C++ requires explicit types for all function parameters.",
    difficulty: 3,
  },
  GlitchRound {
    id: 7,
    corrupted_code: "for(int i=10; i>0; i++)",
    error: "Logical Error",
    cause: "Incrementing instead of decrementing",
    fix: "i--",
    hint: "If you start at 10 and want to reach 0, should you add or subtract?",
    explanation: "To count down, you must use the decrement operator.",
    difficulty: 4,
  },
  GlitchRound {
    id: 8,
    corrupted_code: "void print() { return 5; }",
    error: "Type Mismatch",
    cause: "Void function returning a value",
    fix: "int print()",
    hint: "Check the return type of the function.",
    explanation: "A void function cannot return a value.",
    difficulty: 4,
  },
  GlitchRound {
    id: 9,
    corrupted_code: "Binary search on unsorted array",
    error: "Algorithm Bug",
    cause: "Binary search requires sorted data",
    fix: "Sort array first",
    hint: "What is the prerequisite for Binary Search?",
    explanation: "Binary search only works on data that is already sorted.",
    difficulty: 5,
  },
  GlitchRound {
    id: 10,
    corrupted_code: "Recursive function without base case",
    error: "Stack Overflow",
    cause: "Infinite recursion",
    fix: "Add a base case",
    hint: "When should the recursion stop?",
    explanation: "Recursive functions must have a base case to prevent infinite calls.",
    difficulty: 5,
  },
];

pub static ADVANCED_GLITCH_ROUNDS: [GlitchRound; 10] = [
  GlitchRound {
    id: 1,
    corrupted_code: "int sum=0; for(int i=0; i<1000; i++) if(i%3=0 || i%5=0) sum+=i;",
    error: "Syntax Error",
    cause: "Using assignment (=) instead of equality (==)",
    fix: "if(i%3==0 || i%5==0)",
    hint: "Check your comparison operators inside the if statement.",
    explanation: "Project Euler #1: Multiples of 3 and 5. The sum of all multiples of 3 or 5 below 1000 is 233168.",
    difficulty: 3,
  },
  GlitchRound {
    id: 2,
    corrupted_code: "int a=1, b=2, sum=0; while(b < 4000000) { if(b%2==0) sum+=b; a=b; b=a+b; }",
    error: "Logical Error",
    cause: "Incorrect Fibonacci sequence update (a is overwritten too early)",
    fix: "int next=a+b; a=b; b=next;",
    hint: "How do you update Fibonacci numbers without losing the previous value?",
    explanation: "Project Euler #2: Even Fibonacci numbers. By considering the terms in the Fibonacci sequence whose values do not exceed four million, the sum of the even-valued terms is 4613732.",
    difficulty: 3,
  },
  GlitchRound {
    id: 3,
    corrupted_code: "long n=600851475143; for(int i=2; i<n; i++) if(n%i==0) n/=i;",
    error: "Efficiency/Logic",
    cause: "Loop condition i<n changes as n is divided, and i should be long",
    fix: "for(long i=2; i*i<=n; i++)",
    hint: "To find the largest prime factor, you only need to check up to the square root of n.",
    explanation: "Project Euler #3: Largest prime factor. The prime factors of 13195 are 5, 7, 13 and 29. The largest prime factor of 600851475143 is 6857.",
    difficulty: 4,
  },
  GlitchRound {
    id: 4,
    corrupted_code: "int maxP=0; for(int i=100; i<1000; i++) for(int j=100; j<1000; j++) if(isPal(i*j)) maxP=i*j;",
    error: "Logical Error",
    cause: "Not checking if the new palindrome is actually larger than maxP",
    fix: "if(isPal(i*j) && i*j > maxP)",
    hint: "You found a palindrome, but is it the LARGEST one?",
    explanation: "Project Euler #4: Largest palindrome product. The largest palindrome made from the product of two 2-digit numbers is 9009 = 91 x 99. The largest palindrome made from the product of two 3-digit numbers is 906609.",
    difficulty: 4,
  },
  GlitchRound {
    id: 5,
    corrupted_code: "int n=1; while(true) { bool ok=true; for(int i=1; i<=20; i++) if(n%i!=0) ok=false; if(ok) break; n++; }",
    error: "Efficiency Error",
    cause: "Brute force is too slow; should use LCM",
    fix: "Use Least Common Multiple (LCM) algorithm",
    hint: "Is there a mathematical way to find the smallest number divisible by 1-20 without checking every number?",
    explanation: "Project Euler #5: Smallest multiple. 2520 is the smallest number that can be divided by each of the numbers from 1 to 10 without any remainder. The smallest positive number that is evenly divisible by all of the numbers from 1 to 20 is 232792560.",
    difficulty: 4,
  },
  GlitchRound {
    id: 6,
    corrupted_code: "int s1=0, s2=0; for(int i=1; i<=100; i++) { s1+=i*i; s2+=i; } int diff = s1 - s2*s2;",
    error: "Logical Error",
    cause: "Difference should be (square of sum) - (sum of squares)",
    fix: "int diff = s2*s2 - s1;",
    hint: "The question asks for the difference between the square of the sum and the sum of the squares.",
    explanation: "Project Euler #6: Sum square difference. The difference between the sum of the squares of the first ten natural numbers and the square of the sum is 3025 - 385 = 2640. For the first 100 natural numbers, it is 25164150.",
    difficulty: 3,
  },
  GlitchRound {
    id: 7,
    corrupted_code: "int count=0, n=2; while(count < 10001) { if(isPrime(n)) count++; n++; } cout << n;",
    error: "Off-by-one Error",
    cause: "n is incremented after the 10001st prime is found",
    fix: "cout << n-1;",
    hint: "Watch out for the final increment of n after the loop condition is met.",
    explanation: "Project Euler #7: 10001st prime. By listing the first six prime numbers: 2, 3, 5, 7, 11, and 13, we can see that the 6th prime is 13. The 10001st prime number is 104743.",
    difficulty: 4,
  },
  GlitchRound {
    id: 8,
    corrupted_code: "long maxProd=0; for(int i=0; i<str.len()-13; i++) { long p=1; for(int j=0; j<13; j++) p*=str[i+j]; }",
    error: "Type/Logic Error",
    cause: "str[i+j] is a char, needs to be converted to int (str[i+j]-'0')",
    fix: "p *= (str[i+j] - '0');",
    hint: "Characters like '5' are not the same as the integer 5 in C++.",
    explanation: "Project Euler #8: Largest product in a series. The four adjacent digits in the 1000-digit number that have the greatest product are 9 x 9 x 8 x 9 = 5832. The thirteen adjacent digits that have the greatest product is 23514624000.",
    difficulty: 5,
  },
  GlitchRound {
    id: 9,
    corrupted_code: "for(int a=1; a<1000; a++) for(int b=a; b<1000; b++) { int c = 1000-a-b; if(a*a + b*b = c*c) cout << a*b*c; }",
    error: "Syntax Error",
    cause: "Using assignment (=) instead of equality (==)",
    fix: "if(a*a + b*b == c*c)",
    hint: "Check your Pythagorean theorem condition.",
    explanation: "Project Euler #9: Special Pythagorean triplet. A Pythagorean triplet is a set of three natural numbers, a < b < c, for which, a^2 + b^2 = c^2. There exists exactly one Pythagorean triplet for which a + b + c = 1000. That product abc is 31875000.",
    difficulty: 3,
  },
  GlitchRound {
    id: 10,
    corrupted_code: "long sum=0; for(int i=2; i<2000000; i++) if(isPrime(i)) sum+=i;",
    error: "Efficiency/Type",
    cause: "isPrime check is too slow for 2 million; use a Sieve",
    fix: "Use Sieve of Eratosthenes",
    hint: "Checking every number for primality up to 2 million will take too long. Is there a faster way to find all primes?",
    explanation: "Project Euler #10: Summation of primes. The sum of the primes below 10 is 2 + 3 + 5 + 7 = 17. The sum of all the primes below two million is 142913828922.",
    difficulty: 5,
  },
];

macro_rules! quest {
  ($id:expr, $scenario:expr, [$(($label:expr, $value:expr)),+ $(,)?], $correct:expr, $reasoning:expr) => {
    QuestRound {
      id: $id,
      scenario: $scenario,
      options: &[$(QuestOption { label: $label, value: $value }),+],
      correct_value: $correct,
      reasoning: $reasoning,
    }
  };
}

pub static BASIC_QUEST_ROUNDS: [QuestRound; 10] = [
  quest!(1, "Find a student record quickly in 1 million sorted entries.", [("Linear Search", "A"), ("Binary Search", "B"), ("Bubble Sort", "C")], "B", "Binary Search is O(log n), much faster for sorted data."),
  quest!(2, "Need to store a list of 50 student names.", [("int", "A"), ("string array", "B"), ("float", "C")], "B", "Arrays store multiple values of the same type."),
  quest!(3, "Perform a task exactly 10 times.", [("if statement", "A"), ("for loop", "B"), ("struct", "C")], "B", "For loops are ideal for known iteration counts."),
  quest!(4, "Store a student's name, ID, and GPA together.", [("Array", "A"), ("Structure (struct)", "B"), ("Function", "C")], "B", "Structs group related data of different types."),
  quest!(5, "Save game progress so it persists after closing.", [("Variables", "A"), ("Files", "B"), ("Loops", "C")], "B", "Files provide permanent storage."),
  quest!(6, "Check if a number is even or odd.", [("Modulus (%)", "A"), ("Division (/)", "B"), ("Addition (+)", "C")], "A", "x % 2 == 0 checks for even numbers."),
  quest!(7, "Reusable block of code to calculate area.", [("Variable", "A"), ("Function", "B"), ("Array", "C")], "B", "Functions promote code reuse."),
  quest!(8, "Search for a name in a small, unsorted list.", [("Linear Search", "A"), ("Binary Search", "B"), ("Quick Sort", "C")], "A", "Linear search is simple and works on unsorted data."),
  quest!(9, "Choose one of five different options in a menu.", [("if-else", "A"), ("switch statement", "B"), ("while loop", "C")], "B", "Switch is cleaner for multiple discrete choices."),
  quest!(10, "Keep asking for input until the user types \"exit\".", [("Sentinel Loop", "A"), ("For Loop", "B"), ("Struct", "C")], "A", "Sentinel loops run until a specific value is met."),
];

pub static ADVANCED_QUEST_ROUNDS: [QuestRound; 10] = [
  quest!(1, "SDG 9: Optimize a high-frequency trading system by passing large data structures without copying them.", [("Pass by Value", "A"), ("Pass by Pointer/Reference", "B"), ("Global Variables", "C")], "B", "Pointers/References avoid expensive deep copies of large objects."),
  quest!(2, "SDG 1: A micro-finance app needs to store unique user IDs mapped to their account balances for O(1) access.", [("std::vector", "A"), ("std::unordered_map", "B"), ("std::list", "C")], "B", "Unordered maps provide average constant time complexity for lookups."),
  quest!(3, "SDG 5: Ensure that sensitive user gender data can only be modified through specific validation functions.", [("Public members", "A"), ("Encapsulation (Private members)", "B"), ("Static variables", "C")], "B", "Encapsulation protects data integrity by restricting direct access."),
  quest!(4, "SDG 8: Implement a system to handle job applications in the exact order they were received.", [("Stack (LIFO)", "A"), ("Queue (FIFO)", "B"), ("Priority Queue", "C")], "B", "Queues process elements in First-In-First-Out order."),
  quest!(5, "SDG 10: Create a sorting function that can handle both integer and floating-point donation amounts without rewriting code.", [("Function Overloading", "A"), ("Templates", "B"), ("Void Pointers", "C")], "B", "Templates allow for generic programming across different data types."),
  quest!(6, "SDG 16: Secure a peace treaty document by flipping specific bits in its digital signature.", [("Arithmetic operators", "A"), ("Bitwise operators (^, ~, |)", "B"), ("Logical operators", "C")], "B", "Bitwise operators allow for direct manipulation of individual bits."),
  quest!(7, "SDG 17: A global partnership portal needs to execute a custom \"thank you\" logic provided by different NGOs at runtime.", [("Hardcoded strings", "A"), ("Lambda functions / Callbacks", "B"), ("Switch statements", "C")], "B", "Lambdas provide a way to pass executable logic as arguments."),
  quest!(8, "SDG 12: Prevent memory leaks in a waste-tracking system by automatically releasing memory when it's no longer needed.", [("Raw pointers", "A"), ("Smart pointers (unique_ptr)", "B"), ("Static allocation", "C")], "B", "Smart pointers manage memory automatically using RAII."),
  quest!(9, "SDG 13: Model different types of renewable energy sources (Solar, Wind) that all share a common \"calculateOutput\" method.", [("Multiple inheritance", "A"), ("Polymorphism (Virtual functions)", "B"), ("Structs", "C")], "B", "Polymorphism allows a base class pointer to call derived class methods."),
  quest!(10, "SDG 11: Represent a city's subway network where stations are nodes and tracks are edges.", [("2D Array", "A"), ("Adjacency List (Vector of Vectors)", "B"), ("Linked List", "C")], "B", "Adjacency lists are efficient for representing sparse graphs like transit networks."),
];
