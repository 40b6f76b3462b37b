/*!
# Introductory Tutorial for AI Scripts

An AI script tells one kind of character what to do when something happens
to it. The game calls into the script when the character is spawned, hit,
bored or anything else worth reacting to. The script tests for those
events and sets a few variables in response.

Here is a complete script. It sets a state the first time the character
appears in the world.

```text
// goblin.txt
IfSpawned
  SetState = 5
End
```

Compile it with `aisc`. Pass `--listing` to see what the compiler made of it.

<pre><code>&nbsp;$ aisc --listing goblin.txt
&nbsp;0000 IfSpawned -> 0005
&nbsp;0002   SetState = 5
&nbsp;0005 End -> 0007
</code></pre>

The numbers on the left are word addresses in the compiled output. The
arrow after `IfSpawned` is where the interpreter continues when the
condition is false. It skips everything indented deeper than the
condition itself.

Every script stops at an unindented `End`. Anything after it is ignored.
If you forget it, the compiler adds one for you and warns about it.

Mistakes do not stop the compiler. It reports everything it finds in one
run, so you can fix a whole script at once.

<pre><code>&nbsp;$ aisc goblin.txt
&nbsp;<b>UNKNOWN OPCODE IN goblin.txt LINE 2; SetStat</b>
</code></pre>

When a script has any error, no output file is written and `aisc` exits
with a failure status. Warnings are printed but still produce output.

*/
